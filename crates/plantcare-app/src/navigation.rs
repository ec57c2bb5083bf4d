//! Navigation directives and the screen stack they drive.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    Home,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Swap the current screen for Home (no way back to the form).
    ReplaceWithHome,
    NavigateTo(Screen),
}

/// Stack of visited screens; the last one is on top.
#[derive(Debug, Clone)]
pub struct Router {
    stack: Vec<Screen>,
}

impl Router {
    pub fn new(initial: Screen) -> Self {
        Self { stack: vec![initial] }
    }

    pub fn current(&self) -> Screen {
        self.stack.last().copied().unwrap_or(Screen::Login)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn apply(&mut self, navigation: Navigation) {
        match navigation {
            Navigation::ReplaceWithHome => {
                self.stack.pop();
                self.stack.push(Screen::Home);
            }
            // Going to a screen already in the stack pops back to it
            Navigation::NavigateTo(screen) => {
                if let Some(pos) = self.stack.iter().position(|s| *s == screen) {
                    self.stack.truncate(pos + 1);
                } else {
                    self.stack.push(screen);
                }
            }
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Screen::Login)
    }
}
