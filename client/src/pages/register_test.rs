use super::*;

#[test]
fn validate_register_input_trims_fields() {
    let req = validate_register_input(" Ada ", " ada@example.com ", " ada ", "pw").unwrap();
    assert_eq!(req.name, "Ada");
    assert_eq!(req.email, "ada@example.com");
    assert_eq!(req.username, "ada");
    assert_eq!(req.password, "pw");
}

#[test]
fn validate_register_input_requires_every_field() {
    assert_eq!(validate_register_input("", "a@b.com", "u", "p"), Err("Fill in every field."));
    assert_eq!(validate_register_input("n", "a@b.com", "u", ""), Err("Fill in every field."));
}

#[test]
fn validate_register_input_rejects_malformed_email() {
    for email in ["plain", "@b.com", "a@", "a@b@c"] {
        assert_eq!(
            validate_register_input("n", email, "u", "p"),
            Err("Enter a valid email address."),
            "{email}"
        );
    }
}
