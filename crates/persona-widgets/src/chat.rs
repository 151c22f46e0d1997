//! Chat playground widget.

use std::ops::RangeInclusive;

/// Delay range for the simulated reply, in milliseconds.
pub const REPLY_DELAY_MS: RangeInclusive<u64> = 600..=1800;

/// Who said a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Visitor,
    Bot,
}

/// One chat transcript entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

#[derive(Debug)]
struct PendingReply {
    remaining_ms: u64,
    text: String,
}

/// The chat demo: a local transcript plus at most one scheduled canned reply.
///
/// `send` appends the visitor message and schedules the reply after a bounded
/// random delay; the page event loop reports elapsed time via [`advance`],
/// which delivers the reply once the delay has run out. There is no retry or
/// cancellation; dropping the widget drops the pending reply with it.
///
/// [`advance`]: ChatDemo::advance
#[derive(Debug)]
pub struct ChatDemo {
    messages: Vec<Message>,
    pending: Option<PendingReply>,
    replies_used: usize,
}

const GREETING: &str = "Hello! I'm a scripted stand-in for the real assistant. Ask me anything.";

const CANNED_REPLIES: &[&str] = &[
    "Good question. In production I'd check the docs first, but between us: it depends.",
    "I ran the numbers. The numbers declined to comment.",
    "That's exactly the kind of thing I'd write a blog post about instead of answering directly.",
    "My confidence on that is high, which historically means I should double-check.",
];

impl ChatDemo {
    pub fn new() -> Self {
        Self {
            messages: vec![Message {
                role: Role::Bot,
                text: GREETING.to_string(),
            }],
            pending: None,
            replies_used: 0,
        }
    }

    /// Send a visitor message and schedule the reply after a random delay.
    ///
    /// Empty input is ignored, as is input while a reply is still pending
    /// (the composer is disabled during the typing indicator).
    pub fn send(&mut self, text: &str) {
        self.send_with_delay(text, rand::random_range(REPLY_DELAY_MS));
    }

    /// Send with an explicit delay. Drives the same transition as [`send`];
    /// the delay is only ever chosen, never re-rolled.
    ///
    /// [`send`]: ChatDemo::send
    pub fn send_with_delay(&mut self, text: &str, delay_ms: u64) {
        let text = text.trim();
        if text.is_empty() || self.pending.is_some() {
            return;
        }

        self.messages.push(Message {
            role: Role::Visitor,
            text: text.to_string(),
        });

        let reply = CANNED_REPLIES[self.replies_used % CANNED_REPLIES.len()];
        self.replies_used += 1;

        self.pending = Some(PendingReply {
            remaining_ms: delay_ms,
            text: reply.to_string(),
        });
    }

    /// Advance the widget clock, delivering the pending reply if due.
    pub fn advance(&mut self, elapsed_ms: u64) {
        let Some(mut pending) = self.pending.take() else {
            return;
        };

        if elapsed_ms >= pending.remaining_ms {
            self.messages.push(Message {
                role: Role::Bot,
                text: pending.text,
            });
        } else {
            pending.remaining_ms -= elapsed_ms;
            self.pending = Some(pending);
        }
    }

    /// Whether the typing indicator should show.
    pub fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

impl Default for ChatDemo {
    fn default() -> Self {
        Self::new()
    }
}
