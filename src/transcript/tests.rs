#[cfg(test)]
mod tests {
    use crate::transcript::{RESTART_GREETING, Transcript, WELCOME_GREETING};
    use crate::types::Role;

    #[test]
    fn test_new_transcript_starts_with_welcome() {
        let transcript = Transcript::new();
        assert_eq!(transcript.len(), 1);
        let first = &transcript.turns()[0];
        assert_eq!(first.role, Role::Assistant);
        assert_eq!(first.text, WELCOME_GREETING);
    }

    #[test]
    fn test_append_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.append(Role::User, "I like biology");
        transcript.append(Role::Assistant, "Biology is great! Any city in mind?");

        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.turns()[1].text, "I like biology");
        assert_eq!(transcript.turns()[2].role, Role::Assistant);
    }

    #[test]
    fn test_reset_replaces_history_with_single_restart_greeting() {
        let mut transcript = Transcript::new();
        transcript.append(Role::User, "nursing in Boston");
        transcript.append(Role::Assistant, "Here are some schools...");
        transcript.append(Role::User, "what about cost?");

        transcript.reset();

        assert_eq!(transcript.len(), 1);
        let only = &transcript.turns()[0];
        assert_eq!(only.role, Role::Assistant);
        assert_eq!(only.text, RESTART_GREETING);
    }

    #[test]
    fn test_render_tail_limits_to_last_n() {
        let mut transcript = Transcript::new();
        transcript.append(Role::User, "one");
        transcript.append(Role::Assistant, "two");
        transcript.append(Role::User, "three");
        transcript.append(Role::Assistant, "four");

        let tail = transcript.render_tail(4);
        let lines: Vec<&str> = tail.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "user: one");
        assert_eq!(lines[3], "assistant: four");
        assert!(!tail.contains(WELCOME_GREETING));
    }

    #[test]
    fn test_render_tail_handles_short_history() {
        let transcript = Transcript::new();
        let tail = transcript.render_tail(4);
        assert!(tail.starts_with("assistant: "));
        assert_eq!(tail.lines().count(), WELCOME_GREETING.lines().count());
    }
}
