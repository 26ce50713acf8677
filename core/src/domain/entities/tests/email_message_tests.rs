//! Unit tests for the notification template

use crate::domain::entities::email_message::{EmailMessage, Mailbox, OTP_HTML_BODY};
use crate::domain::entities::otp_code::OtpCode;

#[test]
fn test_otp_notification_template() {
    let code = OtpCode::parse("013579").unwrap();
    let message = EmailMessage::otp_notification(
        Mailbox::new("pilot@misfits.fr", "Misfits Pilot"),
        Mailbox::new("user@example.com", "passenger 1"),
        "Your OTP",
        &code,
    );

    assert_eq!(message.subject, "Your OTP");
    assert_eq!(message.text_body, "Your OTP is 013579");
    assert_eq!(message.to.email, "user@example.com");
    assert_eq!(message.from.name.as_deref(), Some("Misfits Pilot"));
}

#[test]
fn test_html_body_does_not_carry_code() {
    let code = OtpCode::parse("424242").unwrap();
    let message = EmailMessage::otp_notification(
        Mailbox::bare("pilot@misfits.fr"),
        Mailbox::bare("user@example.com"),
        "Your OTP",
        &code,
    );

    assert_eq!(message.html_body, OTP_HTML_BODY);
    assert!(!message.html_body.contains("424242"));
}
