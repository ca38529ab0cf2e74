use alloc::vec::Vec;

use quickcheck::QuickCheck;

use super::quickcheck_tests;
use crate::ByteBuffer;

/// Property: bytes written with `write_block` read back in order.
#[test]
fn write_block_then_read_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(prefix: Vec<u8>, block: Vec<u8>) -> bool {
        let mut buf = ByteBuffer::from(prefix.clone());
        buf.seek_to_end();
        buf.write_block(&ByteBuffer::from(block.clone()));
        buf.reset();

        let mut read = Vec::new();
        while let Some(byte) = buf.read() {
            read.push(byte);
        }
        read.len() == prefix.len() + block.len()
            && read[..prefix.len()] == prefix[..]
            && read[prefix.len()..] == block[..]
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Vec<u8>, Vec<u8>) -> bool);
}

/// Property: reversing twice restores the original bytes.
#[test]
fn reverse_twice_is_identity_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>) -> bool {
        let mut buf = ByteBuffer::from(bytes.clone());
        buf.reverse().reverse();
        buf.as_slice() == bytes.as_slice()
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: block reads partition the buffer without losing bytes.
#[test]
fn read_block_partitions_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>, size: usize) -> bool {
        let size = 1 + size % 70;
        let mut buf = ByteBuffer::from(bytes.clone());
        let mut joined = Vec::new();
        loop {
            let block = buf.read_block(size);
            if block.is_empty() {
                break;
            }
            if block.len() > size {
                return false;
            }
            joined.extend_from_slice(block.as_slice());
        }
        joined == bytes
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Vec<u8>, usize) -> bool);
}
