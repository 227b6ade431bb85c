use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
               _
      __ _  __| | __ _ _ __ ___  _   _ _ __  ___
     / _` |/ _` |/ _` | '__/ _ \| | | | '_ \/ __|
    | (_| | (_| | (_| | | | (_) | |_| | |_) \__ \
     \__,_|\__,_|\__, |_|  \___/ \__,_| .__/|___/
                 |___/                |_|
"#;

pub fn print() {
    print::println(&format!("{}", BANNER.bright_green().bold()));
}
