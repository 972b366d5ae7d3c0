#![allow(dead_code)]

use formstate::form::FormModel;

#[derive(FormModel)]
struct Credentials(String, String);

fn main() {}
