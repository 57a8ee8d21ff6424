use std::fmt;

/// The kind of edit a delta or change performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeltaType {
    /// Elements present only in the revised sequence.
    Insert,
    /// Elements present only in the original sequence.
    Delete,
    /// Elements of the original replaced by different ones in the revised.
    Change,
}

impl fmt::Display for DeltaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeltaType::Insert => "insert",
            DeltaType::Delete => "delete",
            DeltaType::Change => "change",
        };
        f.write_str(name)
    }
}
