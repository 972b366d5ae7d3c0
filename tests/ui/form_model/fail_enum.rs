#![allow(dead_code)]

use formstate::form::FormModel;

#[derive(FormModel)]
enum Step {
    Account,
    Profile,
}

fn main() {}
