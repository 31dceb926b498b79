use glam::{Mat4, Vec2, Vec3, Vec4};
use std::collections::BTreeMap;

/// A value written to a named shader uniform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Mat4(Mat4),
    Vec4(Vec4),
    Vec3(Vec3),
    Vec2(Vec2),
    Float(f32),
    Int(i32),
    Bool(bool),
    /// Texture unit a sampler reads from. Negative means "no valid unit".
    Sampler(i32),
}

/// The active shader program's uniform set.
///
/// Writes take effect immediately and persist until overwritten. Names that
/// the program does not declare are ignored, as GL does for unknown
/// uniform locations.
pub trait ShaderProgram {
    fn set_uniform(&mut self, name: &str, value: UniformValue);
}

/// Shader program that keeps an ordered log of every write.
///
/// Used to check what the broadcaster sends without a GPU.
#[derive(Debug, Default)]
pub struct RecordingProgram {
    writes: Vec<(String, UniformValue)>,
    current: BTreeMap<String, UniformValue>,
}

impl RecordingProgram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write so far, oldest first.
    pub fn writes(&self) -> &[(String, UniformValue)] {
        &self.writes
    }

    /// Last value written to `name`.
    pub fn get(&self, name: &str) -> Option<UniformValue> {
        self.current.get(name).copied()
    }

    /// Forget the write log but keep current values.
    pub fn clear_log(&mut self) {
        self.writes.clear();
    }
}

impl ShaderProgram for RecordingProgram {
    fn set_uniform(&mut self, name: &str, value: UniformValue) {
        tracing::trace!("uniform {name} = {value:?}");
        self.writes.push((name.to_string(), value));
        self.current.insert(name.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let mut program = RecordingProgram::new();
        program.set_uniform("bUseTexture", UniformValue::Bool(true));
        program.set_uniform("bUseTexture", UniformValue::Bool(false));

        assert_eq!(program.writes().len(), 2);
        assert_eq!(program.get("bUseTexture"), Some(UniformValue::Bool(false)));
        assert_eq!(program.get("objectColor"), None);
    }

    #[test]
    fn clear_log_keeps_state() {
        let mut program = RecordingProgram::new();
        program.set_uniform("UVscale", UniformValue::Vec2(Vec2::ONE));
        program.clear_log();

        assert!(program.writes().is_empty());
        assert_eq!(program.get("UVscale"), Some(UniformValue::Vec2(Vec2::ONE)));
    }
}
