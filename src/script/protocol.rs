// src/script/protocol.rs
// Text protocol shared by the command builder and the record decoder
//
// The interpreter only hands back plain text, so records travel as one line each
// with fields joined by a multi-character sentinel. Host values may contain commas,
// which rules out CSV-style framing. Line breaks inside free text are rewritten to
// the line-break marker script-side and restored by the decoder. The sentinels
// themselves are not escaped: a value containing one corrupts its record.

/// Separates fields within one reminder record
pub const FIELD_SEPARATOR: &str = "§§§";
/// Separates the name group from the id group in the list enumeration
pub const GROUP_SEPARATOR: &str = "|||";
/// Joins items inside one group (the interpreter's own list-to-text form)
pub const ITEM_SEPARATOR: &str = ", ";
/// Emitted in place of a field the host reports as missing
pub const ABSENT_MARKER: &str = "∅∅∅";
/// Stands in for a line break inside a free-text field
pub const LINE_BREAK_MARKER: &str = "¶¶¶";

/// Number of positional slots in a reminder record
pub const REMINDER_SLOTS: usize = 9;

/// Positional layout of a reminder record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Name = 0,
    Body = 1,
    Completed = 2,
    List = 3,
    Id = 4,
    CreationDate = 5,
    ModificationDate = 6,
    Priority = 7,
    DueDate = 8,
}

/// Boolean literals as the interpreter renders them
pub const TRUE_LITERAL: &str = "true";
pub const FALSE_LITERAL: &str = "false";

pub fn bool_literal(value: bool) -> &'static str {
    if value { TRUE_LITERAL } else { FALSE_LITERAL }
}

/// The full sentinel set. Builder and decoder take one of these so the
/// sentinels can change without touching either side's callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub field: &'static str,
    pub group: &'static str,
    pub item: &'static str,
    pub absent: &'static str,
    pub line_break: &'static str,
}

impl Delimiters {
    pub const STANDARD: Delimiters = Delimiters {
        field: FIELD_SEPARATOR,
        group: GROUP_SEPARATOR,
        item: ITEM_SEPARATOR,
        absent: ABSENT_MARKER,
        line_break: LINE_BREAK_MARKER,
    };

    /// Sentinels that appear in `value` and would corrupt a record carrying it
    pub fn collisions(&self, value: &str) -> Vec<&'static str> {
        [self.field, self.group, self.absent, self.line_break]
            .into_iter()
            .filter(|s| value.contains(s))
            .collect()
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::STANDARD
    }
}
