//! Output Emitter
//!
//! Abstraction for output production during serialization.

/// Trait for emitting serialized output.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a single space.
    fn emit_space(&mut self);
}

/// String-based emitter for in-memory serialization.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create a new string emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the serialized output.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    #[inline]
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    #[inline]
    fn emit_space(&mut self) {
        self.buffer.push(' ');
    }
}
