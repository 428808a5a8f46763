use std::fmt::{self, Debug, Formatter};

/// An optional password, an empty one counts as none
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Password(Option<String>);

impl Password {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}

impl Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_some() {
            write!(f, "Password(***)")
        } else {
            write!(f, "Password(None)")
        }
    }
}

impl From<Option<String>> for Password {
    fn from(password: Option<String>) -> Self {
        Self(password.filter(|p| !p.is_empty()))
    }
}

impl From<String> for Password {
    fn from(password: String) -> Self {
        Some(password).into()
    }
}

impl From<&str> for Password {
    fn from(password: &str) -> Self {
        password.to_string().into()
    }
}

impl From<Option<&str>> for Password {
    fn from(password: Option<&str>) -> Self {
        password.map(str::to_string).into()
    }
}
