use adgroups_common::config::Config;
use adgroups_common::lookup::LookupResult;
use colored::*;

use crate::terminal::print;

/// Prints the groups of `result` as a one-level tree under the account name.
pub fn group_list(result: &LookupResult, cfg: &Config) {
    if cfg.quiet >= 2 {
        return;
    }

    print::tree_head(0, &result.username);
    if result.groups.is_empty() {
        print::println(&format!(" {} {}", "└─".bright_black(), "no groups".italic()));
        return;
    }

    print::as_tree_one_level(&result.groups);
    print::println("");
    print::centerln(&format!(
        "{} groups",
        result.group_count().to_string().bold().green()
    ));
}
