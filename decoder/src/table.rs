use crate::instruction::InstructionId;
use crate::pattern::BitPattern;

/// One row of an encoding table: an instruction identity, the display
/// mnemonic a formatting layer would use (absent for family or reserved
/// entries), and the bit pattern that identifies the encoding.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TableEntry {
    id: InstructionId,
    mnemonic: Option<&'static str>,
    pattern_text: &'static str,
    pattern: BitPattern,
}

impl TableEntry {
    #[must_use]
    pub const fn id(&self) -> InstructionId {
        self.id
    }

    /// Display mnemonic, if this entry carries one. Never needed for decode
    /// itself; metadata for the text-formatting layer above.
    #[must_use]
    pub const fn mnemonic(&self) -> Option<&'static str> {
        self.mnemonic
    }

    /// The `{0,1,x}` source text the entry was compiled from.
    #[must_use]
    pub const fn pattern_text(&self) -> &'static str {
        self.pattern_text
    }

    #[must_use]
    pub const fn pattern(&self) -> &BitPattern {
        &self.pattern
    }

    #[must_use]
    pub const fn matches(&self, word: u32) -> bool {
        self.pattern.matches(word)
    }
}

/// The raw `(identity, mnemonic, pattern)` triple the tables are written as.
pub(crate) type Row = (InstructionId, Option<&'static str>, &'static str);

/// Compiles a table's rows, in order. Order is load-bearing: patterns
/// overlap on purpose and the scan must hit the more specific entry first,
/// so rows are never sorted or deduplicated.
///
/// # Panics
///
/// Panics if a pattern fails to compile or its length differs from `width`.
/// A wrong-width pattern is a transcription defect that would silently shift
/// every mask bit, so construction fails loudly instead.
pub(crate) fn build_table(width: u8, rows: &[Row]) -> Vec<TableEntry> {
    rows.iter()
        .map(|&(id, mnemonic, pattern_text)| {
            let pattern = match BitPattern::compile(pattern_text) {
                Ok(pattern) => pattern,
                Err(e) => panic!("table entry {id}: {e}"),
            };
            assert!(
                pattern.width() == width,
                "table entry {id}: pattern \"{pattern_text}\" is {} characters, table width is {width}",
                pattern.width()
            );
            TableEntry {
                id,
                mnemonic,
                pattern_text,
                pattern,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builds_in_given_order() {
        let rows: &[Row] = &[
            (InstructionId::Undefined, None, "11011110xxxxxxxx"),
            (InstructionId::BCond, Some("b"), "1101xxxxxxxxxxxx"),
        ];
        let table = build_table(16, rows);
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].id(), InstructionId::Undefined);
        assert_eq!(table[0].mnemonic(), None);
        assert_eq!(table[1].id(), InstructionId::BCond);
        assert_eq!(table[1].mnemonic(), Some("b"));
    }

    #[test]
    #[should_panic(expected = "table width")]
    fn wrong_width_is_fatal() {
        let rows: &[Row] = &[(InstructionId::BCond, Some("b"), "1101xxxxxxxxxxxx")];
        build_table(32, rows);
    }

    #[test]
    #[should_panic(expected = "invalid character")]
    fn malformed_pattern_is_fatal() {
        let rows: &[Row] = &[(InstructionId::BCond, Some("b"), "1101XXXXXXXXXXXX")];
        build_table(16, rows);
    }

    #[test]
    fn wildcard_mask_exposes_operand_fields() {
        let rows: &[Row] = &[(InstructionId::BCond, Some("b"), "1101xxxxxxxxxxxx")];
        let table = build_table(16, rows);
        assert_eq!(table[0].pattern().wildcard_mask(), 0x0FFF);
    }
}
