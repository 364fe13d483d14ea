//! Modal form state.
//!
//! Every "add" dialog in the dashboard is a [`FormState`]: an ordered list
//! of fields, one of which has focus. Text fields take typed characters;
//! choices, sliders and toggles are stepped with the arrow keys. On submit
//! the form is turned into the matching protocol draft by
//! [`FormState::submission`]; validation happens in the draft, not here.

use anchor_protocol::{
    AnxietyLevel, AnxietyLogDraft, BlockDraft, BlockKind, CopingStrategy, EnergyLevel, Mood,
    Priority, Rating, ReflectionDraft, TaskDraft,
};
use chrono::NaiveDate;

/// Which dialog a form represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    NewTask,
    /// Add a time block on `date`.
    NewBlock { date: NaiveDate },
    AnxietyLog,
    Reflection,
}

impl FormKind {
    /// The dialog title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::NewTask => "Add Task",
            Self::NewBlock { .. } => "Add Time Block",
            Self::AnxietyLog => "Log Anxiety Event",
            Self::Reflection => "Daily Reflection",
        }
    }
}

/// Identifies a field independently of its position in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Title,
    Estimate,
    Priority,
    Energy,
    Category,
    Start,
    End,
    Kind,
    Description,
    Trigger,
    Strategy,
    Outcome,
    PriorityMaintained,
    EnergyRating,
    FocusRating,
    AnxietyRating,
    Accomplishments,
    Challenges,
    Improvements,
    Mood,
}

/// The editable value of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// One of a fixed list of options.
    Choice {
        options: Vec<String>,
        selected: usize,
    },
    Toggle(bool),
    /// An integer between `min` and `max` inclusive.
    Slider { value: u8, min: u8, max: u8 },
}

impl FieldValue {
    fn choice<I, S>(options: I, selected: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Choice {
            options: options.into_iter().map(Into::into).collect(),
            selected,
        }
    }

    const fn rating(value: u8) -> Self {
        Self::Slider {
            value,
            min: 1,
            max: 10,
        }
    }

    /// Returns `true` if typed characters go into this field.
    #[must_use]
    pub const fn accepts_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Renders the value for display.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_tui::form::FieldValue;
    ///
    /// assert_eq!(FieldValue::Toggle(true).display(), "[x]");
    /// assert_eq!(FieldValue::Slider { value: 4, min: 1, max: 10 }.display(), "4/10");
    /// ```
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Choice { options, selected } => {
                let label = options.get(*selected).map_or("", String::as_str);
                format!("< {label} >")
            }
            Self::Toggle(on) => (if *on { "[x]" } else { "[ ]" }).to_string(),
            Self::Slider { value, max, .. } => format!("{value}/{max}"),
        }
    }

    fn step(&mut self, delta: i8) {
        match self {
            Self::Text(_) => {}
            Self::Choice { options, selected } => {
                let len = options.len();
                if len > 0 {
                    let shift = usize::from(delta.unsigned_abs()) % len;
                    *selected = if delta < 0 {
                        (*selected + len - shift) % len
                    } else {
                        (*selected + shift) % len
                    };
                }
            }
            Self::Toggle(on) => *on = !*on,
            Self::Slider { value, min, max } => {
                let next = i16::from(*value) + i16::from(delta);
                let next = next.clamp(i16::from(*min), i16::from(*max));
                *value = u8::try_from(next).unwrap_or(*min);
            }
        }
    }
}

/// A labelled form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub id: FieldId,
    pub label: &'static str,
    pub value: FieldValue,
}

impl Field {
    fn text(id: FieldId, label: &'static str, value: impl Into<String>) -> Self {
        Self {
            id,
            label,
            value: FieldValue::Text(value.into()),
        }
    }

    const fn new(id: FieldId, label: &'static str, value: FieldValue) -> Self {
        Self { id, label, value }
    }
}

/// What a submitted form turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Task(TaskDraft),
    Block(BlockDraft),
    AnxietyLog(AnxietyLogDraft),
    Reflection(ReflectionDraft),
}

/// An open dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    kind: FormKind,
    fields: Vec<Field>,
    focused: usize,
}

/// Index of the default option (`Medium`) in [`Priority::ALL`] and
/// [`EnergyLevel::ALL`].
const MEDIUM_INDEX: usize = 1;

impl FormState {
    fn with_fields(kind: FormKind, fields: Vec<Field>) -> Self {
        Self {
            kind,
            fields,
            focused: 0,
        }
    }

    /// The dashboard's add-task dialog.
    #[must_use]
    pub fn new_task() -> Self {
        Self::with_fields(
            FormKind::NewTask,
            vec![
                Field::text(FieldId::Title, "Title", ""),
                Field::text(FieldId::Estimate, "Estimate (min)", ""),
                Field::new(
                    FieldId::Priority,
                    "Priority",
                    FieldValue::choice(Priority::ALL.map(Priority::label), MEDIUM_INDEX),
                ),
                Field::new(
                    FieldId::Energy,
                    "Energy",
                    FieldValue::choice(EnergyLevel::ALL.map(EnergyLevel::label), MEDIUM_INDEX),
                ),
                Field::text(FieldId::Category, "Category", ""),
            ],
        )
    }

    /// The planner's add-block dialog, pre-filled from `draft`.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_protocol::BlockDraft;
    /// use anchor_tui::form::{FormState, Submission};
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 7, 18).unwrap();
    /// let form = FormState::new_block(date, BlockDraft::for_slot(date, 14));
    /// let Submission::Block(draft) = form.submission() else { unreachable!() };
    /// assert_eq!(draft.start, "14:00");
    /// assert_eq!(draft.date, Some(date));
    /// ```
    #[must_use]
    pub fn new_block(date: NaiveDate, draft: BlockDraft) -> Self {
        Self::with_fields(
            FormKind::NewBlock { date },
            vec![
                Field::text(FieldId::Title, "Title", draft.title),
                Field::text(FieldId::Start, "Start Time", draft.start),
                Field::text(FieldId::End, "End Time", draft.end),
                Field::new(
                    FieldId::Kind,
                    "Type",
                    FieldValue::choice(
                        BlockKind::ALL.map(BlockKind::label),
                        BlockKind::ALL
                            .iter()
                            .position(|k| *k == draft.kind)
                            .unwrap_or(0),
                    ),
                ),
                Field::new(
                    FieldId::Priority,
                    "Priority",
                    FieldValue::choice(
                        Priority::ALL.map(Priority::label),
                        Priority::ALL
                            .iter()
                            .position(|p| *p == draft.priority)
                            .unwrap_or(MEDIUM_INDEX),
                    ),
                ),
                Field::new(
                    FieldId::Energy,
                    "Energy",
                    FieldValue::choice(
                        EnergyLevel::ALL.map(EnergyLevel::label),
                        EnergyLevel::ALL
                            .iter()
                            .position(|e| *e == draft.energy_required)
                            .unwrap_or(MEDIUM_INDEX),
                    ),
                ),
                Field::text(
                    FieldId::Description,
                    "Description (Optional)",
                    draft.description,
                ),
            ],
        )
    }

    /// The anxiety manager's log dialog. The first strategy option is
    /// "none".
    #[must_use]
    pub fn anxiety_log(strategies: &[CopingStrategy]) -> Self {
        let options = std::iter::once("(none)".to_string())
            .chain(strategies.iter().map(|s| s.name.clone()));
        Self::with_fields(
            FormKind::AnxietyLog,
            vec![
                Field::text(FieldId::Trigger, "What triggered this anxiety?", ""),
                Field::new(
                    FieldId::Strategy,
                    "Coping strategy used",
                    FieldValue::choice(options, 0),
                ),
                Field::text(FieldId::Outcome, "How did it go?", ""),
                Field::new(
                    FieldId::PriorityMaintained,
                    "I was able to maintain my priorities",
                    FieldValue::Toggle(AnxietyLogDraft::default().priority_maintained),
                ),
            ],
        )
    }

    /// The reflection hub's daily reflection dialog.
    #[must_use]
    pub fn reflection() -> Self {
        let defaults = ReflectionDraft::default();
        Self::with_fields(
            FormKind::Reflection,
            vec![
                Field::new(
                    FieldId::EnergyRating,
                    "Energy Level (1-10)",
                    FieldValue::rating(defaults.energy.value()),
                ),
                Field::new(
                    FieldId::FocusRating,
                    "Focus Quality (1-10)",
                    FieldValue::rating(defaults.focus.value()),
                ),
                Field::new(
                    FieldId::AnxietyRating,
                    "Anxiety Level (1-10)",
                    FieldValue::rating(defaults.anxiety.value()),
                ),
                Field::text(FieldId::Accomplishments, "What did you accomplish today?", ""),
                Field::text(FieldId::Challenges, "What challenges did you face?", ""),
                Field::text(FieldId::Improvements, "What could you improve tomorrow?", ""),
                Field::new(
                    FieldId::Mood,
                    "Mood",
                    FieldValue::choice(
                        Mood::ALL.map(|mood| format!("{} {}", mood.glyph(), mood.label())),
                        0,
                    ),
                ),
            ],
        )
    }

    #[must_use]
    pub const fn kind(&self) -> FormKind {
        self.kind
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Index of the focused field.
    #[must_use]
    pub const fn focused(&self) -> usize {
        self.focused
    }

    fn focused_mut(&mut self) -> Option<&mut FieldValue> {
        self.fields.get_mut(self.focused).map(|field| &mut field.value)
    }

    /// Moves focus to the next field, wrapping around.
    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn prev_field(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Steps the focused choice, slider or toggle. Text fields ignore it.
    pub fn adjust(&mut self, delta: i8) {
        if let Some(value) = self.focused_mut() {
            value.step(delta);
        }
    }

    /// Appends a character to the focused text field.
    pub fn insert_char(&mut self, ch: char) {
        if let Some(FieldValue::Text(value)) = self.focused_mut() {
            value.push(ch);
        }
    }

    /// Removes the last character of the focused text field.
    pub fn backspace(&mut self) {
        if let Some(FieldValue::Text(value)) = self.focused_mut() {
            value.pop();
        }
    }

    /// Returns `true` if the focused field takes typed characters.
    #[must_use]
    pub fn is_text_focused(&self) -> bool {
        self.fields
            .get(self.focused)
            .is_some_and(|field| field.value.accepts_text())
    }

    fn value(&self, id: FieldId) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|field| field.id == id)
            .map(|field| &field.value)
    }

    fn text(&self, id: FieldId) -> String {
        match self.value(id) {
            Some(FieldValue::Text(value)) => value.clone(),
            _ => String::new(),
        }
    }

    fn selected(&self, id: FieldId) -> usize {
        match self.value(id) {
            Some(FieldValue::Choice { selected, .. }) => *selected,
            _ => 0,
        }
    }

    fn selected_label(&self, id: FieldId) -> Option<&str> {
        match self.value(id) {
            Some(FieldValue::Choice { options, selected }) => {
                options.get(*selected).map(String::as_str)
            }
            _ => None,
        }
    }

    fn toggle(&self, id: FieldId) -> bool {
        matches!(self.value(id), Some(FieldValue::Toggle(true)))
    }

    fn slider(&self, id: FieldId) -> u8 {
        match self.value(id) {
            Some(FieldValue::Slider { value, .. }) => *value,
            _ => 0,
        }
    }

    fn pick<T: Copy + Default>(options: &[T], index: usize) -> T {
        options.get(index).copied().unwrap_or_default()
    }

    /// Converts the current input into the matching draft.
    #[must_use]
    pub fn submission(&self) -> Submission {
        match self.kind {
            FormKind::NewTask => Submission::Task(TaskDraft {
                title: self.text(FieldId::Title),
                estimated_minutes: self.text(FieldId::Estimate),
                priority: Self::pick(&Priority::ALL, self.selected(FieldId::Priority)),
                energy_required: Self::pick(&EnergyLevel::ALL, self.selected(FieldId::Energy)),
                category: self.text(FieldId::Category),
            }),
            FormKind::NewBlock { date } => Submission::Block(BlockDraft {
                date: Some(date),
                title: self.text(FieldId::Title),
                start: self.text(FieldId::Start),
                end: self.text(FieldId::End),
                kind: Self::pick(&BlockKind::ALL, self.selected(FieldId::Kind)),
                priority: Self::pick(&Priority::ALL, self.selected(FieldId::Priority)),
                energy_required: Self::pick(&EnergyLevel::ALL, self.selected(FieldId::Energy)),
                description: self.text(FieldId::Description),
            }),
            FormKind::AnxietyLog => {
                let coping_strategy = match self.selected(FieldId::Strategy) {
                    0 => String::new(),
                    _ => self
                        .selected_label(FieldId::Strategy)
                        .unwrap_or_default()
                        .to_string(),
                };
                Submission::AnxietyLog(AnxietyLogDraft {
                    trigger: self.text(FieldId::Trigger),
                    coping_strategy,
                    outcome: self.text(FieldId::Outcome),
                    priority_maintained: self.toggle(FieldId::PriorityMaintained),
                })
            }
            FormKind::Reflection => Submission::Reflection(ReflectionDraft {
                energy: Rating::clamped(self.slider(FieldId::EnergyRating)),
                focus: Rating::clamped(self.slider(FieldId::FocusRating)),
                anxiety: AnxietyLevel::clamped(self.slider(FieldId::AnxietyRating)),
                accomplishments: self.text(FieldId::Accomplishments),
                challenges: self.text(FieldId::Challenges),
                improvements: self.text(FieldId::Improvements),
                mood: Self::pick(&Mood::ALL, self.selected(FieldId::Mood)),
            }),
        }
    }
}
