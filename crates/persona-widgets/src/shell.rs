//! The demo page shell: one tab strip, one mounted widget at a time.

use crate::chat::ChatDemo;
use crate::config::ConfigPreview;
use crate::features::FeaturesPanel;
use crate::feedback::FeedbackForm;
use crate::status::StatusDashboard;

/// The named tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Playground,
    Status,
    Features,
    Config,
    Feedback,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Playground,
        Tab::Status,
        Tab::Features,
        Tab::Config,
        Tab::Feedback,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Playground => "Playground",
            Self::Status => "Status",
            Self::Features => "Features",
            Self::Config => "Config",
            Self::Feedback => "Feedback",
        }
    }
}

/// The widget subtree owned by the active tab.
#[derive(Debug)]
pub enum ActiveWidget {
    Playground(ChatDemo),
    Status(StatusDashboard),
    Features(FeaturesPanel),
    Config(ConfigPreview),
    Feedback(FeedbackForm),
}

impl ActiveWidget {
    fn mount(tab: Tab) -> Self {
        match tab {
            Tab::Playground => Self::Playground(ChatDemo::new()),
            Tab::Status => Self::Status(StatusDashboard::new()),
            Tab::Features => Self::Features(FeaturesPanel::new()),
            Tab::Config => Self::Config(ConfigPreview::new()),
            Tab::Feedback => Self::Feedback(FeedbackForm::new()),
        }
    }

    fn tab(&self) -> Tab {
        match self {
            Self::Playground(_) => Tab::Playground,
            Self::Status(_) => Tab::Status,
            Self::Features(_) => Tab::Features,
            Self::Config(_) => Tab::Config,
            Self::Feedback(_) => Tab::Feedback,
        }
    }
}

/// The shell. Clicking a tab mounts that tab's widget fresh and drops the
/// previous one, so no state survives a tab switch. Clicking the already
/// active tab changes nothing.
#[derive(Debug)]
pub struct DemoShell {
    active: ActiveWidget,
}

impl DemoShell {
    pub fn new() -> Self {
        Self {
            active: ActiveWidget::mount(Tab::default()),
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active.tab()
    }

    pub fn active(&self) -> &ActiveWidget {
        &self.active
    }

    pub fn active_mut(&mut self) -> &mut ActiveWidget {
        &mut self.active
    }

    /// Tab click.
    pub fn select(&mut self, tab: Tab) {
        if self.active.tab() != tab {
            self.active = ActiveWidget::mount(tab);
        }
    }
}

impl Default for DemoShell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_tab_is_playground() {
        let shell = DemoShell::new();
        assert_eq!(shell.active_tab(), Tab::Playground);
        assert!(matches!(shell.active(), ActiveWidget::Playground(_)));
    }

    #[test]
    fn selecting_a_tab_mounts_its_widget() {
        let mut shell = DemoShell::new();

        shell.select(Tab::Feedback);

        assert_eq!(shell.active_tab(), Tab::Feedback);
        assert!(matches!(shell.active(), ActiveWidget::Feedback(_)));
    }

    #[test]
    fn switching_away_discards_widget_state() {
        let mut shell = DemoShell::new();

        if let ActiveWidget::Playground(chat) = shell.active_mut() {
            chat.send_with_delay("remember me", 500);
            assert_eq!(chat.messages().len(), 2);
        }

        shell.select(Tab::Status);
        shell.select(Tab::Playground);

        // Fresh mount: only the greeting again, pending reply gone
        if let ActiveWidget::Playground(chat) = shell.active() {
            assert_eq!(chat.messages().len(), 1);
            assert!(!chat.is_waiting());
        } else {
            panic!("playground should be active");
        }
    }

    #[test]
    fn reselecting_the_active_tab_keeps_state() {
        let mut shell = DemoShell::new();

        if let ActiveWidget::Playground(chat) = shell.active_mut() {
            chat.send_with_delay("still here?", 500);
        }

        shell.select(Tab::Playground);

        if let ActiveWidget::Playground(chat) = shell.active() {
            assert_eq!(chat.messages().len(), 2);
        } else {
            panic!("playground should be active");
        }
    }
}
