use formstate::form::{FieldValues, FormModel};

#[derive(Clone, formstate::form::FormModel)]
struct LoginForm {
    email: String,
    remember_days: u32,
}

fn main() {
    let fields = LoginForm::fields();
    assert_eq!(fields.email().as_str(), "email");
    assert_eq!(fields.remember_days().as_str(), "remember_days");
    assert_eq!(LoginForm::field_names(), &["email", "remember_days"]);

    let model = LoginForm {
        email: "a@b.com".to_string(),
        remember_days: 7,
    };
    let values: FieldValues = model.to_values();
    assert_eq!(values.get("remember_days").map(String::as_str), Some("7"));

    let parsed = LoginForm::from_values(&values).expect("values parse back");
    assert_eq!(parsed.email, "a@b.com");
    assert_eq!(parsed.remember_days, 7);
}
