//! The on-screen keypad: which button sits where and what it dispatches.

use serde::{Deserialize, Serialize};

use super::intent::{Digit, Intent, Operation};

/// What the `%` key does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PercentKey {
    /// Choose `%` as the pending operation (`a % b` is `b` percent of `a`).
    #[default]
    Operation,
    /// Divide the current operand by 100 in place.
    Convert,
}

impl PercentKey {
    pub fn intent(self) -> Intent {
        match self {
            Self::Operation => Intent::ChooseOperation(Operation::Percent),
            Self::Convert => Intent::Percentage,
        }
    }
}

/// A single keypad button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    /// Number of grid columns the button covers.
    pub span: usize,
    pub intent: Intent,
}

impl Button {
    fn new(label: &'static str, intent: Intent) -> Self {
        Self {
            label,
            span: 1,
            intent,
        }
    }

    fn wide(mut self) -> Self {
        self.span = 2;
        self
    }
}

/// Number of columns in the keypad grid.
pub const COLUMNS: usize = 4;

/// The keypad layout, row by row.
#[derive(Clone, Debug)]
pub struct Keypad {
    rows: Vec<Vec<Button>>,
}

impl Keypad {
    pub fn new(percent_key: PercentKey) -> Self {
        let digit = |label: &'static str| {
            let c = label.chars().next().unwrap_or('0');
            Button::new(label, Intent::AddDigit(Digit::keypad(c)))
        };
        let op = |op: Operation| Button::new(op.symbol(), Intent::ChooseOperation(op));

        let rows = vec![
            vec![
                Button::new("AC", Intent::Clear).wide(),
                Button::new("DEL", Intent::DeleteDigit),
                op(Operation::Divide),
            ],
            vec![digit("1"), digit("2"), digit("3"), op(Operation::Multiply)],
            vec![digit("4"), digit("5"), digit("6"), op(Operation::Add)],
            vec![digit("7"), digit("8"), digit("9"), op(Operation::Subtract)],
            vec![
                digit("."),
                digit("0"),
                Button::new("%", percent_key.intent()),
                Button::new("=", Intent::Evaluate),
            ],
        ];

        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Button>] {
        &self.rows
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }

    /// Look up a button by its label (case-insensitive).
    pub fn button(&self, label: &str) -> Option<&Button> {
        self.buttons().find(|b| b.label.eq_ignore_ascii_case(label))
    }

    /// Render the layout as a text grid.
    pub fn render(&self) -> String {
        const CELL: usize = 5;

        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|b| {
                        let width = CELL * b.span + (b.span - 1);
                        format!("[{:^width$}]", b.label, width = width - 2)
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new(PercentKey::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_row_fills_the_grid() {
        let keypad = Keypad::default();
        assert_eq!(keypad.rows().len(), 5);
        for row in keypad.rows() {
            assert_eq!(row.iter().map(|b| b.span).sum::<usize>(), COLUMNS);
        }
    }

    #[test]
    fn test_percent_button_follows_setting() {
        let keypad = Keypad::new(PercentKey::Operation);
        assert_eq!(
            keypad.button("%").unwrap().intent,
            Intent::ChooseOperation(Operation::Percent)
        );

        let keypad = Keypad::new(PercentKey::Convert);
        assert_eq!(keypad.button("%").unwrap().intent, Intent::Percentage);
    }

    #[test]
    fn test_button_lookup() {
        let keypad = Keypad::default();
        assert_eq!(keypad.button("ac").unwrap().intent, Intent::Clear);
        assert_eq!(keypad.button("DEL").unwrap().intent, Intent::DeleteDigit);
        assert_eq!(keypad.button("=").unwrap().intent, Intent::Evaluate);
        assert_eq!(
            keypad.button("7").unwrap().intent,
            Intent::AddDigit(Digit::new('7').unwrap())
        );
        assert!(keypad.button("sin").is_none());
        assert_eq!(keypad.buttons().count(), 19);
    }

    #[test]
    fn test_render_aligns_rows() {
        let rendered = Keypad::default().render();
        let widths: Vec<usize> = rendered.lines().map(|l| l.chars().count()).collect();
        assert_eq!(widths.len(), 5);
        assert!(widths.iter().all(|&w| w == widths[0]));
        assert!(rendered.starts_with("[   AC    ] [DEL] [ ÷ ]"));
    }
}
