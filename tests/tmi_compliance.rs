//! Decoding tests against realistic Twitch chat lines.
//!
//! Covers the tag segment rules, payload isolation, moderator derivation
//! and the error taxonomy, for both bare tag lines and full TMI lines.
//!
//! Run with: `cargo test --test tmi_compliance`

use twitch_tags::{
    decode, decode_chat, decode_resub, parse_tags, DecodeError, Decoder, DecoderConfig,
    EventKind, TwitchEvent,
};

const PRIVMSG: &str = "@badge-info=subscriber/8;badges=subscriber/6,premium/1;color=#1E90FF;\
display-name=Ronni;emotes=;first-msg=0;flags=;id=b34ccfc7-4977-403a-8a94-33c6bac34fb8;mod=0;\
returning-chatter=0;room-id=1337;subscriber=1;tmi-sent-ts=1507246572675;turbo=1;user-id=1337;\
user-type= :ronni!ronni@ronni.tmi.twitch.tv PRIVMSG #ronni :Kappa Keepo Kappa";

const USERNOTICE: &str = "@badge-info=;badges=staff/1,broadcaster/1,turbo/1;color=#008000;\
display-name=Ronni;emotes=;id=db25007f-7a18-43eb-9379-80131e44d633;login=ronni;mod=0;\
msg-id=resub;msg-param-cumulative-months=6;msg-param-months=6;msg-param-should-share-streak=1;\
msg-param-streak-months=2;msg-param-sub-plan=Prime;msg-param-sub-plan-name=Prime;room-id=12345678;\
subscriber=1;system-msg=ronni\\shas\\ssubscribed\\sfor\\s6\\smonths!;tmi-sent-ts=1507246572675;\
turbo=1;user-id=87654321;user-type=staff :tmi.twitch.tv USERNOTICE #dallas :Great stream -- keep it up!";

mod tag_segment {
    use super::*;

    #[test]
    fn test_empty_segment_is_empty_map() {
        assert!(parse_tags("").unwrap().is_empty());
    }

    #[test]
    fn test_real_segment() {
        let (segment, _) = PRIVMSG.split_once(" :").unwrap();
        let tags = parse_tags(segment.trim_start_matches('@')).unwrap();
        assert_eq!(tags.len(), 16);
        assert_eq!(tags.get("badges"), Some("subscriber/6,premium/1"));
        assert_eq!(tags.get("emotes"), Some(""));
        assert_eq!(tags.get("user-type"), Some(""));
    }

    #[test]
    fn test_repeated_key_keeps_last_value() {
        let tags = parse_tags("color=#000000;color=#FFFFFF").unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags.get("color"), Some("#FFFFFF"));
    }

    #[test]
    fn test_fragment_without_equals() {
        let raw = "display-name=Ash;mod;subscriber=1 :hi";
        assert_eq!(
            decode_chat(raw),
            Err(DecodeError::MalformedTagFragment {
                fragment: "mod".to_string()
            })
        );
    }
}

mod payload {
    use super::*;

    const TAGS: &str =
        "display-name=Ash;color=#FF0000;mod=0;subscriber=1;turbo=0;room-id=1;user-id=2";

    #[test]
    fn test_scenario_line() {
        let msg = decode_chat(&format!("{} :hello world :) :smile", TAGS)).unwrap();
        assert_eq!(msg.username, "Ash");
        assert_eq!(msg.color, "#FF0000");
        assert!(!msg.is_moderator);
        assert!(msg.is_subscriber);
        assert!(!msg.has_premium_badge);
        assert_eq!(msg.text, "hello world :) :smile");
    }

    #[test]
    fn test_payload_is_taken_verbatim() {
        let payloads = [
            "",
            ":",
            " :",
            "::",
            "a :b :c",
            "https://clips.twitch.tv/x?t=1:2",
            ":D :P :O",
            "trailing space ",
            "  leading spaces",
        ];
        for payload in payloads {
            let msg = decode_chat(&format!("{} :{}", TAGS, payload)).unwrap();
            assert_eq!(msg.text, payload, "payload {:?} was altered", payload);
        }
    }

    #[test]
    fn test_no_delimiter() {
        assert_eq!(decode_chat(TAGS), Err(DecodeError::MissingPayloadDelimiter));
        assert_eq!(
            decode(TAGS, EventKind::Resub),
            Err(DecodeError::MissingPayloadDelimiter)
        );
    }
}

mod moderator {
    use super::*;

    fn chat(mod_flag: &str, room_id: &str, user_id: &str) -> bool {
        let raw = format!(
            "display-name=Ash;color=;mod={};subscriber=0;turbo=0;room-id={};user-id={} :hi",
            mod_flag, room_id, user_id
        );
        decode_chat(&raw).unwrap().is_moderator
    }

    #[test]
    fn test_broadcaster_is_moderator() {
        assert!(chat("0", "42", "42"));
    }

    #[test]
    fn test_plain_viewer_is_not_moderator() {
        assert!(!chat("0", "42", "7"));
    }

    #[test]
    fn test_mod_flag() {
        assert!(chat("1", "42", "7"));
    }
}

mod tmi_lines {
    use super::*;

    #[test]
    fn test_privmsg() {
        let msg = Decoder::new(DecoderConfig::tmi()).decode_chat(PRIVMSG).unwrap();
        assert_eq!(msg.username, "Ronni");
        assert_eq!(msg.color, "#1E90FF");
        assert!(msg.is_moderator);
        assert!(msg.is_subscriber);
        assert!(msg.has_premium_badge);
        assert_eq!(msg.text, "Kappa Keepo Kappa");
        assert_eq!(msg.sent_at.unwrap().timestamp_millis(), 1507246572675);
    }

    #[test]
    fn test_usernotice_resub() {
        let event = Decoder::new(DecoderConfig::tmi())
            .decode(USERNOTICE, EventKind::Resub)
            .unwrap();
        match event {
            TwitchEvent::Resub(resub) => {
                assert_eq!(resub.username, "Ronni");
                assert_eq!(resub.months_subscribed, 6);
                assert_eq!(resub.text, "Great stream -- keep it up!");
            }
            other => panic!("expected resub, got {:?}", other),
        }
    }

    #[test]
    fn test_default_framing_keeps_envelope_in_text() {
        let msg = decode_chat(PRIVMSG).unwrap();
        assert_eq!(
            msg.text,
            "ronni!ronni@ronni.tmi.twitch.tv PRIVMSG #ronni :Kappa Keepo Kappa"
        );
    }
}

mod resub {
    use super::*;

    #[test]
    fn test_missing_months() {
        assert_eq!(
            decode("display-name=Ash :text", EventKind::Resub),
            Err(DecodeError::MissingRequiredTag {
                key: "msg-param-months"
            })
        );
    }

    #[test]
    fn test_non_numeric_months() {
        let err = decode_resub("display-name=Ash;msg-param-months=many :text").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidNumericTag { .. }));
        assert_eq!(err.key(), Some("msg-param-months"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_empty_message() {
        let resub = decode_resub("display-name=Ash;msg-param-months=2 :").unwrap();
        assert_eq!(resub.text, "");
    }

    #[test]
    fn test_missing_display_name() {
        assert_eq!(
            decode_resub("msg-param-months=2 :hi"),
            Err(DecodeError::MissingRequiredTag {
                key: "display-name"
            })
        );
    }
}
