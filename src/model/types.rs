//! Shared types for the Model

/// Field of the login form that receives keystrokes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

/// Login form contents
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
}

impl LoginForm {
    /// Field currently receiving input
    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }

    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

/// Screen the client is routed to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
}

/// Single-line text prompt used by the new-folder and upload dialogs
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextPrompt {
    pub open: bool,
    pub input: String,
}

impl TextPrompt {
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close and drop whatever was typed
    pub fn close(&mut self) {
        self.open = false;
        self.input.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_focus_toggle() {
        let mut form = LoginForm::default();
        form.focused_mut().push_str("me@example.com");
        form.toggle_focus();
        form.focused_mut().push_str("hunter2");
        assert_eq!(form.email, "me@example.com");
        assert_eq!(form.password, "hunter2");
        assert!(form.is_complete());
    }

    #[test]
    fn test_login_form_incomplete() {
        let form = LoginForm {
            email: "  ".into(),
            password: "x".into(),
            focus: LoginField::Email,
        };
        assert!(!form.is_complete());
    }

    #[test]
    fn test_text_prompt_close_clears_input() {
        let mut prompt = TextPrompt::default();
        prompt.open();
        prompt.input.push_str("Docs");
        prompt.close();
        assert_eq!(prompt, TextPrompt::default());
    }
}
