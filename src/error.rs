use thiserror::Error;

#[doc = r#"
Any error that can occur while building or serializing a MIDI file.

Each variant wraps the error of the component that failed.
"#]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MidiError {
    /// File-level configuration errors
    #[error("File: {0}")]
    File(#[from] FileError),
    /// Channel event construction errors
    #[error("Event: {0}")]
    Event(#[from] EventError),
    /// Meta event errors
    #[error("Meta event: {0}")]
    Meta(#[from] MetaError),
    /// Track builder errors
    #[error("Track: {0}")]
    Track(#[from] TrackError),
    /// Note name and pitch conversion errors
    #[error("Pitch: {0}")]
    Pitch(#[from] PitchError),
    /// Delta-time errors
    #[error("Delta time: {0}")]
    DeltaTime(#[from] DeltaTimeError),
    /// Tempo conversion errors
    #[error("Tempo: {0}")]
    Tempo(#[from] TempoError),
    /// SMPTE offset errors
    #[error("SMPTE: {0}")]
    Smpte(#[from] SmpteError),
}

/// Shorthand for results produced by this crate.
pub type MidiResult<T> = Result<T, MidiError>;

/// Errors with the file configuration
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FileError {
    /// Ticks per quarter note must be in `1..=32767`.
    #[error("Ticks per quarter note must be between 1 and 32767, got {0}")]
    InvalidTicks(i64),
    /// Ticks per quarter note must be a whole number.
    #[error("Ticks per quarter note must be an integer")]
    FractionalTicks,
    /// The header counts tracks in 16 bits
    #[error("A file holds at most 65535 tracks, got {0}")]
    TooManyTracks(usize),
    /// Chunk lengths are 32 bits
    #[error("Chunk of {0} bytes does not fit a 32-bit length")]
    ChunkTooLong(usize),
}

/// Errors raised when constructing a channel voice event
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EventError {
    /// The status nibble isn't one of the seven channel voice messages
    #[error("Trying to set an unknown event type: {0:#04X}")]
    InvalidKind(u8),
    /// Channels are numbered 0 through 15
    #[error("Channel {0} is out of bounds (0-15)")]
    InvalidChannel(u8),
}

/// Errors raised when serializing a meta event
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MetaError {
    /// The event was never given a type
    #[error("Type for meta event not specified")]
    MissingType,
    /// The length prefix is a single byte
    #[error("Meta event payload is {0} bytes long, the maximum is 255")]
    PayloadTooLong(usize),
}

/// Errors raised by the track builders
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TrackError {
    /// A chord needs at least one pitch
    #[error("Chord must contain at least one pitch")]
    EmptyChord,
}

/// Errors converting between note names and pitches
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PitchError {
    /// Neither a number nor a name of the form `<letter><accidentals><octave>`
    #[error("Could not parse note name {0:?}")]
    Malformed(alloc::string::String),
    /// The pitch doesn't fit in a data byte
    #[error("Pitch {0} is out of range (0-255)")]
    OutOfRange(i64),
    /// Pitches below 12 have no name in the octave numbering used here
    #[error("Pitch {0} has no note name")]
    Unnamed(u8),
}

/// Errors dealing with variable-length delta-times
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DeltaTimeError {
    /// Delta-times count ticks since the previous event
    #[error("Delta time cannot be negative, got {0}")]
    Negative(i64),
    /// Delta-times must fit in 32 bits
    #[error("Delta time {0} does not fit in 32 bits")]
    Overflow(i64),
    /// The byte sequence ended before a byte without the continuation bit
    #[error("Variable-length quantity is truncated")]
    Truncated,
}

/// Errors converting between beats per minute and microseconds per quarter note
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TempoError {
    /// Neither side of the conversion may be zero
    #[error("Tempo cannot be zero")]
    Zero,
    /// The tempo meta event stores 24 bits
    #[error("{0} microseconds per quarter note does not fit in 24 bits")]
    TooSlow(u64),
}

/// Errors converting hex strings to bytes
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HexError {
    /// Not a hexadecimal digit
    #[error("Invalid hex digit {0:?}")]
    InvalidDigit(char),
    /// The value needs more bytes than were requested
    #[error("Value needs {needed} bytes but only {width} were requested")]
    TooWide {
        /// bytes the value occupies
        needed: usize,
        /// bytes requested by the caller
        width: usize,
    },
}

/// Errors validating an SMPTE offset
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SmpteError {
    /// Hours range from 0 to 23
    #[error("Invalid hour offset: {0}")]
    HourOffset(u8),
    /// Minutes range from 0 to 59
    #[error("Invalid minute offset: {0}")]
    MinuteOffset(u8),
    /// Seconds range from 0 to 59
    #[error("Invalid second offset: {0}")]
    SecondOffset(u8),
    /// Frames must be lower than the frame rate
    #[error("Invalid frame {frame} for {fps} fps")]
    Frame {
        /// The offending frame
        frame: u8,
        /// The nominal frame rate
        fps: u8,
    },
    /// Subframes range from 0 to 99
    #[error("Invalid subframe: {0}")]
    Subframe(u8),
}

#[cfg(feature = "std")]
#[doc = r#"
An error writing a MIDI file into a [`std::io::Write`] sink
"#]
#[derive(Debug, Error)]
pub enum WriteError {
    /// Building the byte stream failed
    #[error("Building {0}")]
    Midi(#[from] MidiError),
    /// The sink refused the bytes
    #[error("Writing {0}")]
    Io(#[from] std::io::Error),
}
