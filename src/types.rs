/// Which flavour of diff text is being colored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiffStyle {
    Unknown,
    Traditional,
    Unified,
}

/// What a single input line means to the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    RangeHeader,
    Left,
    Right,
    Separator,
    Plain,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOp {
    Equal,
    Insert,
    Delete,
}

/// One step of an edit script between two strings.
///
/// Concatenating the `Equal` and `Delete` segments in order gives back the
/// old string; `Equal` and `Insert` give back the new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSegment {
    pub op: EditOp,
    pub text: String,
}

impl EditSegment {
    pub fn new(op: EditOp, text: &str) -> EditSegment {
        EditSegment {
            op,
            text: text.to_string(),
        }
    }

    pub fn equal(text: &str) -> EditSegment {
        EditSegment::new(EditOp::Equal, text)
    }

    pub fn insert(text: &str) -> EditSegment {
        EditSegment::new(EditOp::Insert, text)
    }

    pub fn delete(text: &str) -> EditSegment {
        EditSegment::new(EditOp::Delete, text)
    }
}

/// When the diff style gets decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Detection {
    /// Look at the whole input before coloring anything.
    PreScan,
    /// Take the style from the first range header met while coloring.
    Streaming,
}
