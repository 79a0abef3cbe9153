//! Form field value objects

/// The fields collected by the profile form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Email,
    GithubUrl,
    YearsOfExperience,
    Password,
    ConfirmPassword,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::Email,
        FieldName::GithubUrl,
        FieldName::YearsOfExperience,
        FieldName::Password,
        FieldName::ConfirmPassword,
    ];

    /// Name used on the wire (JSON payload keys and server error keys)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::GithubUrl => "githubUrl",
            Self::YearsOfExperience => "yearsOfExperience",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    /// Resolve a wire name; unknown names yield `None`
    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }

    /// Position of the field in the form
    pub fn index(&self) -> usize {
        match self {
            Self::Email => 0,
            Self::GithubUrl => 1,
            Self::YearsOfExperience => 2,
            Self::Password => 3,
            Self::ConfirmPassword => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::GithubUrl => "GitHub URL",
            Self::YearsOfExperience => "Years of Experience (1 - 10)",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn input_kind(&self) -> InputKind {
        match self {
            Self::Email => InputKind::Email,
            Self::GithubUrl => InputKind::Text,
            Self::YearsOfExperience => InputKind::Number,
            Self::Password | Self::ConfirmPassword => InputKind::Password,
        }
    }
}

/// Kind of input widget a field is rendered as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Email,
    Text,
    Number,
    Password,
}

impl InputKind {
    /// Whether a typed character is accepted by this input
    pub fn accepts(&self, c: char) -> bool {
        match self {
            InputKind::Number => c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E'),
            InputKind::Email | InputKind::Password => !c.is_control() && !c.is_whitespace(),
            InputKind::Text => !c.is_control(),
        }
    }

    pub fn is_masked(&self) -> bool {
        matches!(self, InputKind::Password)
    }
}

/// A single input bound to a field name
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub kind: InputKind,
    pub placeholder: &'static str,
    pub value: String,
}

impl FormField {
    pub fn new(name: FieldName) -> Self {
        let kind = name.input_kind();
        Self {
            name,
            kind,
            placeholder: name.placeholder(),
            value: String::new(),
        }
    }

    /// Push a character to the field value.
    /// Returns false when the input kind rejects the character.
    pub fn push_char(&mut self, c: char) -> bool {
        if !self.kind.accepts(c) {
            return false;
        }
        self.value.push(c);
        true
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) -> bool {
        self.value.pop().is_some()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Numeric reading of the value; `None` when it is not a finite number
    pub fn as_number(&self) -> Option<f64> {
        let trimmed = self.value.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.kind.is_masked() {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}
