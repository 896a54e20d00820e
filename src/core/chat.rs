//! Canned assistant for the chat pane.
//!
//! Replies are picked by keyword: the lower-cased message is searched for
//! each key of [`RESPONSES`] in order and the first hit wins. Messages
//! that contain no key get the `default` reply.

use std::time::Duration;

use rand::Rng;

use crate::config::chat_delay;

/// A canned reply: a lead sentence and optional follow-up lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    pub key: &'static str,
    pub text: &'static str,
    pub follow_up: &'static [&'static str],
}

impl Response {
    /// Full reply text: lead, a blank line, then the follow-ups.
    pub fn render(&self) -> String {
        if self.follow_up.is_empty() {
            return self.text.to_string();
        }
        format!("{}\n\n{}", self.text, self.follow_up.join("\n"))
    }
}

/// Reply table, in match order.
pub static RESPONSES: &[Response] = &[
    Response {
        key: "default",
        text: "I'm here to help! Could you please be more specific about what you'd like to learn about machine learning?",
        follow_up: &[
            "You can ask about:",
            "- ML basics and concepts",
            "- Specific algorithms",
            "- Course recommendations",
            "- Learning paths",
        ],
    },
    Response {
        key: "hello",
        text: "Hello! I'm excited to help you with your machine learning journey. What would you like to learn about?",
        follow_up: &[
            "- Getting started with ML",
            "- Course recommendations",
            "- Assessment preparation",
        ],
    },
    Response {
        key: "course",
        text: "We offer several courses ranging from ML basics to advanced topics. What's your current experience level with machine learning?",
        follow_up: &[
            "We have courses in:",
            "- ML Foundations",
            "- Deep Learning",
            "- Natural Language Processing",
            "- Computer Vision",
        ],
    },
    Response {
        key: "transformer",
        text: "Transformers are a powerful architecture in deep learning, particularly for NLP tasks. Would you like to learn about their key components?",
        follow_up: &[
            "Key topics include:",
            "- Self-attention mechanism",
            "- Multi-head attention",
            "- Positional encoding",
            "- Feed-forward networks",
        ],
    },
    Response {
        key: "neural",
        text: "Neural networks are fundamental to deep learning. Would you like to understand their basic structure or learn about specific architectures?",
        follow_up: &[
            "We can discuss:",
            "- Basic neural network concepts",
            "- Activation functions",
            "- Backpropagation",
            "- Different architectures",
        ],
    },
    Response {
        key: "help",
        text: "I can help you with various ML topics and guide you through our platform.",
        follow_up: &[
            "Try asking about:",
            "- ML concepts and terminology",
            "- Course recommendations",
            "- Project ideas",
            "- Learning resources",
        ],
    },
];

/// Pick the reply for a message.
pub fn best_match(input: &str) -> &'static Response {
    let normalized = input.to_lowercase();
    RESPONSES
        .iter()
        .find(|response| normalized.contains(response.key))
        .unwrap_or(&RESPONSES[0])
}

/// Rendered reply text for a message.
pub fn respond(input: &str) -> String {
    best_match(input).render()
}

/// How long a host should show the assistant as typing.
pub fn typing_delay<R: Rng>(rng: &mut R) -> Duration {
    let jitter = rng.gen_range(0..chat_delay::JITTER_MS);
    Duration::from_millis(chat_delay::BASE_MS + jitter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_keyword_match() {
        assert_eq!(best_match("Hello there").key, "hello");
        assert_eq!(best_match("which COURSES do you have?").key, "course");
        assert_eq!(best_match("explain transformers").key, "transformer");
        assert_eq!(best_match("neural nets?").key, "neural");
        assert_eq!(best_match("I need help").key, "help");
    }

    #[test]
    fn test_first_key_in_table_order_wins() {
        // "help" appears first in the text, but "course" comes first in the table.
        assert_eq!(best_match("help me pick a course").key, "course");
        assert_eq!(best_match("hello, what is a neural network").key, "hello");
    }

    #[test]
    fn test_fallback_to_default() {
        assert_eq!(best_match("what is gradient descent").key, "default");
        assert_eq!(best_match("").key, "default");
    }

    #[test]
    fn test_render_joins_follow_up() {
        let reply = respond("hello");
        assert!(reply.starts_with("Hello! I'm excited"));
        assert!(reply.contains("?\n\n- Getting started with ML\n- Course recommendations"));
        assert!(reply.ends_with("- Assessment preparation"));
    }

    #[test]
    fn test_render_without_follow_up() {
        let response = Response {
            key: "x",
            text: "Just this.",
            follow_up: &[],
        };
        assert_eq!(response.render(), "Just this.");
    }

    #[test]
    fn test_typing_delay_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let delay = typing_delay(&mut rng);
            assert!(delay >= Duration::from_millis(1000));
            assert!(delay < Duration::from_millis(1500));
        }
    }
}
