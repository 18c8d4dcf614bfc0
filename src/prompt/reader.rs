//! Byte-at-a-time line reader.

use std::io::{self, ErrorKind, Read};
use std::iter::FusedIterator;

/// Carriage return.
pub const CR: u8 = 13;

/// Line feed.
pub const LF: u8 = 10;

/// Bytes that end a line.
pub const LINE_TERMINATORS: [u8; 2] = [CR, LF];

/// Yields the bytes of one line from a reader, one `read` call per byte.
///
/// The terminator (CR or LF) is consumed but never yielded, and nothing past it
/// is read: for a CR LF pair the LF is left in the source for the next line.
/// End-of-stream ends the line without an error. Once finished the iterator
/// stays finished; build a new one over the same reader to get the next line.
pub struct ByteReader<'a, R: Read + ?Sized> {
    reader: &'a mut R,
    finished: bool,
    reached_eof: bool,
}

impl<'a, R: Read + ?Sized> ByteReader<'a, R> {
    /// Creates a line reader positioned at the reader's current cursor.
    pub fn new(reader: &'a mut R) -> Self {
        Self {
            reader,
            finished: false,
            reached_eof: false,
        }
    }

    /// Whether the line ended because the source was exhausted.
    pub fn reached_eof(&self) -> bool {
        self.reached_eof
    }
}

impl<R: Read + ?Sized> Iterator for ByteReader<'_, R> {
    type Item = io::Result<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut byte = [0_u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => {
                    self.finished = true;
                    self.reached_eof = true;
                    return None;
                }
                Ok(_) if LINE_TERMINATORS.contains(&byte[0]) => {
                    self.finished = true;
                    return None;
                }
                Ok(_) => return Some(Ok(byte[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

impl<R: Read + ?Sized> FusedIterator for ByteReader<'_, R> {}
