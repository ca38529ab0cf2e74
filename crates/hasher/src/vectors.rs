//! Known-answer table used by the self-test runner and the test suite.

/// An input string with its expected MD5 hex digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownAnswer {
    /// Text to hash.
    pub input: &'static str,
    /// Expected lowercase hex digest.
    pub md5: &'static str,
}

/// Inputs covering one-, two- and four-byte UTF-8, a message that fills one
/// block exactly, and one that needs two blocks.
pub const KNOWN_ANSWERS: &[KnownAnswer] = &[
    KnownAnswer {
        input: "",
        md5: "d41d8cd98f00b204e9800998ecf8427e",
    },
    KnownAnswer {
        input: "0123456789ABCDEF",
        md5: "e43df9b5a46b755ea8f1b4dd08265544",
    },
    KnownAnswer {
        input: "El gato volador llegará mañana",
        md5: "f540a23aabcff84f3c825512651a5346",
    },
    KnownAnswer {
        input: "you can't have a metal band name without a ü character",
        md5: "1a910b5df2f204331eb3ab2ddc5e2e2c",
    },
    KnownAnswer {
        input: "now for a really messed up character: 𐍈",
        md5: "d43d668f897edc7c27d79d88fb0f7089",
    },
    KnownAnswer {
        input: "this is a longer message because we need to test the ability of the hashing \
                functions to handle more than one block",
        md5: "c198bfc5bb296324473d6c022ca7401d",
    },
    KnownAnswer {
        input: "this is exactly one MD5 block because we need to test that too!!",
        md5: "2ff9c3da9de6c9f83aefaff9b15dbf66",
    },
];
