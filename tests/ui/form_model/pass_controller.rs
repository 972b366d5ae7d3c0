use formstate::prelude::*;

#[derive(Clone, FormModel)]
struct SignupForm {
    password: String,
    confirm_password: String,
}

fn main() {
    let fields = SignupForm::fields();
    let model = SignupForm {
        password: String::new(),
        confirm_password: String::new(),
    };
    let mut controller = FormController::from_model(&model, FormOptions::default())
        .expect("no field uses the form error key");
    controller
        .set_rule(fields.password(), rules::min_length(6, "too short"))
        .expect("password is registered");
    controller.register_form_rule(rules::fields_match(
        fields.password(),
        fields.confirm_password(),
        "Passwords do not match",
    ));

    controller
        .handle_change(fields.password(), "abc123")
        .expect("change");
    controller
        .handle_change(fields.confirm_password(), "abc123")
        .expect("change");

    let submitted = controller
        .submit_with(SignupForm::from_values)
        .expect("form is valid")
        .expect("values parse");
    assert_eq!(submitted.password, submitted.confirm_password);
}
