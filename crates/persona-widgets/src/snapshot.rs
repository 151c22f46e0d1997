//! Static HTML snapshots of widget state for the demos page.
//!
//! The deployed site is static, so the builder embeds each widget's rendered
//! state into the page; this module is that rendering. It is markup only --
//! wiring the transitions to DOM events is the page script's concern.

use crate::chat::{ChatDemo, Role};
use crate::config::ConfigPreview;
use crate::features::FeaturesPanel;
use crate::feedback::{FeedbackForm, FormState};
use crate::shell::{ActiveWidget, DemoShell, Tab};
use crate::status::StatusDashboard;

/// Render the shell: tab strip plus the active widget subtree.
pub fn shell_html(shell: &DemoShell) -> String {
    let tabs: String = Tab::ALL
        .iter()
        .map(|tab| {
            let class = if *tab == shell.active_tab() {
                "tab active"
            } else {
                "tab"
            };
            format!(
                "<button class=\"{}\" data-tab=\"{}\">{}</button>",
                class,
                tab.label().to_lowercase(),
                tab.label()
            )
        })
        .collect();

    let widget = match shell.active() {
        ActiveWidget::Playground(chat) => chat_html(chat),
        ActiveWidget::Status(dash) => status_html(dash),
        ActiveWidget::Features(panel) => features_html(panel),
        ActiveWidget::Config(preview) => config_html(preview),
        ActiveWidget::Feedback(form) => feedback_html(form),
    };

    format!(
        "<div class=\"demo-shell\">\n<nav class=\"demo-tabs\">{}</nav>\n<section class=\"demo-widget\">\n{}\n</section>\n</div>",
        tabs, widget
    )
}

pub fn chat_html(chat: &ChatDemo) -> String {
    let messages: String = chat
        .messages()
        .iter()
        .map(|m| {
            let who = match m.role {
                Role::Visitor => "visitor",
                Role::Bot => "bot",
            };
            format!(
                "<div class=\"chat-message {}\">{}</div>\n",
                who,
                escape(&m.text)
            )
        })
        .collect();

    let indicator = if chat.is_waiting() {
        "<div class=\"chat-typing\">…</div>\n"
    } else {
        ""
    };

    format!(
        "<div class=\"chat-demo\">\n{}{}<form class=\"chat-composer\"><input type=\"text\" placeholder=\"Say something\"><button>Send</button></form>\n</div>",
        messages, indicator
    )
}

pub fn status_html(dash: &StatusDashboard) -> String {
    let rows: String = dash
        .services()
        .iter()
        .map(|s| {
            format!(
                "<tr><td>{}</td><td class=\"health-{}\">{}</td><td>{} ms</td></tr>\n",
                escape(s.name),
                s.health.label(),
                s.health.label(),
                s.latency_ms
            )
        })
        .collect();

    format!(
        "<div class=\"status-dashboard\">\n<table>\n<thead><tr><th>Service</th><th>Status</th><th>Latency</th></tr></thead>\n<tbody>\n{}</tbody>\n</table>\n<p class=\"status-updated\">Updated {}s ago · auto-refresh {}</p>\n</div>",
        rows,
        dash.seconds_since_refresh(),
        if dash.auto_refresh() { "on" } else { "off" }
    )
}

pub fn features_html(panel: &FeaturesPanel) -> String {
    let capabilities: String = panel
        .capabilities()
        .iter()
        .map(|c| {
            format!(
                "<li><strong>{}</strong> — {}</li>\n",
                escape(c.name),
                escape(c.summary)
            )
        })
        .collect();

    let testimonial = panel
        .carousel()
        .current()
        .map(|t| {
            format!(
                "<blockquote class=\"testimonial\">{}<cite>{}</cite></blockquote>",
                escape(t.quote),
                escape(t.author)
            )
        })
        .unwrap_or_default();

    format!(
        "<div class=\"features-panel\">\n<ul class=\"capabilities\">\n{}</ul>\n{}\n</div>",
        capabilities, testimonial
    )
}

pub fn config_html(preview: &ConfigPreview) -> String {
    let snapshot = preview.snapshot_json().unwrap_or_default();

    format!(
        "<div class=\"config-preview\">\n<label>Model: {}</label>\n<label>Temperature: {}</label>\n<label>Max tokens: {}</label>\n<pre class=\"config-snapshot\">{}</pre>\n</div>",
        preview.model().label(),
        preview.temperature(),
        preview.max_tokens(),
        escape(&snapshot)
    )
}

pub fn feedback_html(form: &FeedbackForm) -> String {
    match form.state() {
        FormState::Submitted => {
            "<div class=\"feedback-form success\"><p>Thanks! Message received.</p></div>".to_string()
        }
        FormState::Editing => format!(
            "<form class=\"feedback-form\">\n<input name=\"name\" placeholder=\"Name\" value=\"{}\">\n<input name=\"email\" placeholder=\"Email\" value=\"{}\">\n<textarea name=\"message\" placeholder=\"Message\">{}</textarea>\n<button>Send feedback</button>\n</form>",
            escape(form.name()),
            escape(form.email()),
            escape(form.message())
        ),
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
