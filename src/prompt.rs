//! Line-oriented interactive prompt.
//!
//! [`Prompt`] writes a short prompt message to an output sink and reads one
//! line at a time from an input source, byte by byte, into a bounded buffer.
//! On top of that it offers integer reads and a numbered selection menu.

use std::fmt::Display;
use std::io::{self, Read, Stderr, Stdin, Write};

use tracing::debug;

pub mod error;
pub mod reader;

pub use error::PromptError;
pub use reader::ByteReader;

/// Prompt message shown before each read by [`Prompt::with_default_string`].
pub const DEFAULT_MESSAGE: &str = "#? ";

/// Capacity of the default read buffer, which bounds a single input line.
pub const DEFAULT_BUFFER_SIZE: usize = 255;

const EOL: &str = "\n";

/// Allocates a fresh read buffer for every line read.
pub type BufferFactory = Box<dyn Fn() -> Box<[u8]> + Send + Sync>;

/// Returns a buffer factory producing zeroed buffers of `size` bytes.
pub fn fixed_buffer(size: usize) -> BufferFactory {
    Box::new(move || vec![0_u8; size].into_boxed_slice())
}

/// Text encoding used for everything written to and read from the terminal.
#[derive(Debug, Clone, Copy)]
pub struct Codec {
    /// Turns text into the bytes written to the sink.
    pub encode: fn(&str) -> Vec<u8>,
    /// Turns the bytes of an input line into text.
    pub decode: fn(&[u8]) -> String,
}

impl Codec {
    /// UTF-8; invalid input sequences decode to U+FFFD.
    pub const UTF8: Self = Self {
        encode: encode_utf8,
        decode: decode_utf8,
    };
}

impl Default for Codec {
    fn default() -> Self {
        Self::UTF8
    }
}

fn encode_utf8(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

fn decode_utf8(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Construction-time configuration of a [`Prompt`].
pub struct PromptOptions<R, W> {
    /// Source of user input.
    pub reader: R,
    /// Sink for prompt messages and printed text.
    pub writer: W,
    /// Allocates the buffer each line is read into.
    pub buffer_factory: BufferFactory,
    /// Text encoding for both directions.
    pub codec: Codec,
}

impl PromptOptions<Stdin, Stderr> {
    /// Standard wiring: reads stdin, writes stderr, 255-byte buffer, UTF-8.
    ///
    /// Writing to stderr keeps stdout free for command output.
    pub fn standard() -> Self {
        Self::new(io::stdin(), io::stderr())
    }
}

impl<R, W> PromptOptions<R, W> {
    /// Options over the given streams with the default buffer and codec.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            buffer_factory: fixed_buffer(DEFAULT_BUFFER_SIZE),
            codec: Codec::UTF8,
        }
    }

    /// Uses fixed buffers of `size` bytes.
    pub fn with_buffer_size(self, size: usize) -> Self {
        self.with_buffer_factory(fixed_buffer(size))
    }

    /// Uses a custom buffer factory.
    pub fn with_buffer_factory(mut self, buffer_factory: BufferFactory) -> Self {
        self.buffer_factory = buffer_factory;
        self
    }

    /// Uses a custom codec.
    pub fn with_codec(mut self, codec: Codec) -> Self {
        self.codec = codec;
        self
    }
}

/// One line read from the input source.
struct Line {
    text: String,
    len: usize,
    eof: bool,
}

/// Interactive prompt over an input source and an output sink.
pub struct Prompt<R, W> {
    message: Vec<u8>,
    reader: R,
    writer: W,
    buffer_factory: BufferFactory,
    codec: Codec,
}

impl<R: Read, W: Write> Prompt<R, W> {
    /// Creates a prompt showing `message` before every read.
    pub fn new(message: &str, options: PromptOptions<R, W>) -> Self {
        let PromptOptions {
            reader,
            writer,
            buffer_factory,
            codec,
        } = options;

        Self {
            message: (codec.encode)(message),
            reader,
            writer,
            buffer_factory,
            codec,
        }
    }

    /// Creates a prompt showing [`DEFAULT_MESSAGE`].
    pub fn with_default_string(options: PromptOptions<R, W>) -> Self {
        Self::new(DEFAULT_MESSAGE, options)
    }

    /// Writes the parts joined by single spaces, without a line ending.
    pub fn print<I>(&mut self, parts: I) -> Result<(), PromptError>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let text = join_parts(parts);
        self.write_text(&text)
    }

    /// Writes the parts joined by single spaces, followed by a newline.
    pub fn print_ln<I>(&mut self, parts: I) -> Result<(), PromptError>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let mut text = join_parts(parts);
        text.push_str(EOL);
        self.write_text(&text)
    }

    /// Shows the prompt message and reads one line.
    ///
    /// The line ends at CR, LF or end of input; the terminator is not part of
    /// the result. Fails with [`PromptError::BufferOverflow`] when the line
    /// holds more bytes than the read buffer.
    pub fn read_string(&mut self) -> Result<String, PromptError> {
        Ok(self.read_line()?.text)
    }

    /// Reads a line and parses it as an integer in `radix` (10 by default).
    ///
    /// Surrounding whitespace is ignored. Returns `Ok(None)` when the line is
    /// not a number in that radix or the radix is outside `2..=36`.
    pub fn read_int(&mut self, radix: Option<u32>) -> Result<Option<i64>, PromptError> {
        let text = self.read_string()?;
        Ok(parse_int(&text, radix.unwrap_or(10)))
    }

    /// Shows `values` as a numbered menu and returns the one the user picks.
    ///
    /// Answers that are not a number between 1 and `values.len()` are ignored
    /// and the prompt is shown again, without the menu. The loop only ends
    /// early when the input source closes.
    pub fn select<'v, T: Display>(&mut self, values: &'v [T]) -> Result<&'v T, PromptError> {
        if values.is_empty() {
            return Err(PromptError::EmptySelection);
        }

        self.print_ln([render_menu(values)])?;

        loop {
            let line = self.read_line()?;
            if line.eof && line.len == 0 {
                return Err(PromptError::InputClosed);
            }

            let choice = parse_int(&line.text, 10)
                .and_then(|n| usize::try_from(n).ok())
                .filter(|n| (1..=values.len()).contains(n));

            match choice {
                Some(n) => return Ok(&values[n - 1]),
                None => debug!(input = %line.text.trim(), "Rejected menu selection"),
            }
        }
    }

    fn read_line(&mut self) -> Result<Line, PromptError> {
        self.writer.write_all(&self.message)?;
        self.writer.flush()?;

        let mut buffer = (self.buffer_factory)();
        let mut len = 0;
        let mut bytes = ByteReader::new(&mut self.reader);

        for byte in bytes.by_ref() {
            let byte = byte?;
            if len >= buffer.len() {
                debug!(capacity = buffer.len(), "Input line overflowed read buffer");
                return Err(PromptError::BufferOverflow {
                    capacity: buffer.len(),
                });
            }
            buffer[len] = byte;
            len += 1;
        }
        let eof = bytes.reached_eof();

        Ok(Line {
            text: (self.codec.decode)(&buffer[..len]),
            len,
            eof,
        })
    }

    fn write_text(&mut self, text: &str) -> Result<(), PromptError> {
        let bytes = (self.codec.encode)(text);
        self.writer.write_all(&bytes)?;
        self.writer.flush()?;
        Ok(())
    }
}

fn join_parts<I>(parts: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    parts
        .into_iter()
        .map(|part| part.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders `values` as `1) first`, `2) second`, ... one per line.
pub(crate) fn render_menu<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| format!("{}) {value}", i + 1))
        .collect::<Vec<_>>()
        .join(EOL)
}

fn parse_int(text: &str, radix: u32) -> Option<i64> {
    if !(2..=36).contains(&radix) {
        return None;
    }
    i64::from_str_radix(text.trim(), radix).ok()
}
