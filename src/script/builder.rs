// src/script/builder.rs
// Renders one interpreter script per operation
//
// Every caller-supplied string goes through `escape::literal` before it is
// placed in the script. Optional clauses are emitted only for present fields.

use super::escape::literal;
use super::protocol::{Delimiters, bool_literal};
use super::{Operation, Script};
use crate::types::{NewReminder, ReminderFilter, ReminderUpdate};

/// Formats a host date as `MM/DD/YYYY H:MM AM/PM`, empty for a missing date
const DATE_HANDLER: &str = r#"on fmtDate(d)
    if d is missing value then return ""
    set mo to text -2 thru -1 of ("0" & ((month of d) as integer))
    set dy to text -2 thru -1 of ("0" & (day of d))
    set mi to text -2 thru -1 of ("0" & (minutes of d))
    set hr to hours of d
    if hr < 12 then
        set ap to "AM"
    else
        set ap to "PM"
    end if
    set hr to hr mod 12
    if hr = 0 then set hr to 12
    return mo & "/" & dy & "/" & ((year of d) as text) & " " & (hr as text) & ":" & mi & " " & ap
end fmtDate"#;

/// Builds scripts against one host application with one sentinel set
#[derive(Debug, Clone)]
pub struct ScriptBuilder {
    application: String,
    delimiters: Delimiters,
}

impl Default for ScriptBuilder {
    fn default() -> Self {
        Self::new("Reminders")
    }
}

impl ScriptBuilder {
    pub fn new(application: impl Into<String>) -> Self {
        Self {
            application: application.into(),
            delimiters: Delimiters::STANDARD,
        }
    }

    pub fn with_delimiters(mut self, delimiters: Delimiters) -> Self {
        self.delimiters = delimiters;
        self
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    fn tell(&self, body: &str) -> String {
        format!(
            "tell application {}\n{}end tell",
            literal(&self.application),
            body
        )
    }

    /// Handler that folds every line break (CRLF, CR, LF) into the line-break marker
    fn line_handler(&self) -> String {
        format!(
            "on lineText(t)\n    \
             set saved to AppleScript's text item delimiters\n    \
             set AppleScript's text item delimiters to {{return & linefeed, return, linefeed}}\n    \
             set parts to text items of t\n    \
             set AppleScript's text item delimiters to {}\n    \
             set t to parts as text\n    \
             set AppleScript's text item delimiters to saved\n    \
             return t\n\
             end lineText",
            literal(self.delimiters.line_break)
        )
    }

    /// Handler that substitutes the absent marker for a missing note
    fn note_handler(&self) -> String {
        format!(
            "on noteText(b)\n    if b is missing value then return {}\n    return lineText(b)\nend noteText",
            literal(self.delimiters.absent)
        )
    }

    /// Statements appending one record line for reminder `var` to `output`
    fn record_line(&self, var: &str, indent: &str) -> String {
        let fs = literal(self.delimiters.field);
        let fields = [
            format!("my lineText(name of {var})"),
            format!("my noteText(body of {var})"),
            format!("((completed of {var}) as text)"),
            format!("my lineText(name of container of {var})"),
            format!("(id of {var})"),
            format!("my fmtDate(creation date of {var})"),
            format!("my fmtDate(modification date of {var})"),
            format!("((priority of {var}) as text)"),
            format!("my fmtDate(due date of {var})"),
        ];
        format!(
            "{indent}set output to output & {} & linefeed\n",
            fields.join(&format!(" & {fs} & "))
        )
    }

    /// Wrap a reminder-returning tell body with the handlers it calls
    fn record_script(&self, operation: Operation, body: &str) -> Script {
        let text = format!(
            "{}\n\n{}\n\n{}\n\n{}",
            DATE_HANDLER,
            self.line_handler(),
            self.note_handler(),
            self.tell(body)
        );
        Script::new(operation, text)
    }

    /// Every list's names and ids as two item-joined groups around the group separator
    pub fn list_lists(&self) -> Script {
        let tell = self.tell(
            "    set listNames to name of every list\n    set listIds to id of every list\n",
        );
        let text = format!(
            "{tell}\n\
             set AppleScript's text item delimiters to {item}\n\
             set namesText to listNames as text\n\
             set idsText to listIds as text\n\
             set AppleScript's text item delimiters to \"\"\n\
             return namesText & {group} & idsText",
            item = literal(self.delimiters.item),
            group = literal(self.delimiters.group),
        );
        Script::new(Operation::ListLists, text)
    }

    /// Reminders, optionally scoped to one list and/or one completion state
    pub fn list_reminders(&self, filter: &ReminderFilter) -> Script {
        let mut query = String::from("every reminder");
        if let Some(list_name) = &filter.list_name {
            query.push_str(&format!(" of list {}", literal(list_name)));
        }
        if let Some(completed) = filter.completed {
            query.push_str(&format!(" whose completed is {}", bool_literal(completed)));
        }

        let body = format!(
            "    set output to \"\"\n    set found to ({query})\n    repeat with r in found\n{}    end repeat\n    return output\n",
            self.record_line("r", "        ")
        );
        self.record_script(Operation::ListReminders, &body)
    }

    /// Create in the named list; returns the new id as bare text
    pub fn create_reminder(&self, new: &NewReminder) -> Script {
        let mut body = format!(
            "    set targetList to list {}\n    set newReminder to make new reminder at end of targetList with properties {{name:{}}}\n",
            literal(&new.list_name),
            literal(&new.name)
        );
        if let Some(note) = &new.body {
            body.push_str(&format!("    set body of newReminder to {}\n", literal(note)));
        }
        if let Some(due) = &new.due_date {
            body.push_str(&format!(
                "    set due date of newReminder to date {}\n",
                literal(due)
            ));
        }
        if let Some(priority) = new.priority {
            body.push_str(&format!("    set priority of newReminder to {}\n", priority));
        }
        body.push_str("    return id of newReminder\n");
        Script::new(Operation::CreateReminder, self.tell(&body))
    }

    /// One assignment per present field, in the order name, body, completed, due date, priority
    pub fn update_reminder(&self, id: &str, update: &ReminderUpdate) -> Script {
        let mut body = format!("    set r to reminder id {}\n", literal(id));
        if let Some(name) = &update.name {
            body.push_str(&format!("    set name of r to {}\n", literal(name)));
        }
        if let Some(note) = &update.body {
            body.push_str(&format!("    set body of r to {}\n", literal(note)));
        }
        if let Some(completed) = update.completed {
            body.push_str(&format!(
                "    set completed of r to {}\n",
                bool_literal(completed)
            ));
        }
        if let Some(due) = &update.due_date {
            body.push_str(&format!("    set due date of r to date {}\n", literal(due)));
        }
        if let Some(priority) = update.priority {
            body.push_str(&format!("    set priority of r to {}\n", priority));
        }
        body.push_str("    return id of r\n");
        Script::new(Operation::UpdateReminder, self.tell(&body))
    }

    pub fn delete_reminder(&self, id: &str) -> Script {
        let body = format!("    delete reminder id {}\n", literal(id));
        Script::new(Operation::DeleteReminder, self.tell(&body))
    }

    /// Case-insensitive substring match on name or note, in host enumeration order
    pub fn search_reminders(&self, term: &str) -> Script {
        let body = format!(
            "    set output to \"\"\n    set searchTerm to {}\n    repeat with r in (every reminder)\n        set noteBody to body of r\n        if noteBody is missing value then set noteBody to \"\"\n        if ((name of r) contains searchTerm) or (noteBody contains searchTerm) then\n{}        end if\n    end repeat\n    return output\n",
            literal(term),
            self.record_line("r", "            ")
        );
        self.record_script(Operation::SearchReminders, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::escape::testing::{read_literals, read_shell_word};

    const ADVERSARIAL: &[&str] = &[
        "say \"hi\"",
        "it's",
        "C:\\path\\",
        "§§§|||∅∅∅",
        "multi\nline",
        "\" & (do shell script \"id\") & \"",
        "'; echo pwned; '",
    ];

    fn builder() -> ScriptBuilder {
        ScriptBuilder::default()
    }

    /// Every adversarial value survives as exactly one literal, and the script
    /// survives the shell layer intact.
    fn assert_well_formed(script: &Script, expected_values: &[&str]) {
        let literals = read_literals(script.as_str()).expect("balanced literals");
        for value in expected_values {
            assert!(
                literals.iter().any(|l| l == value),
                "value {:?} not found as a literal in {:?}",
                value,
                literals
            );
        }
        let line = script.shell_line("osascript");
        let word = line.strip_prefix("osascript -e ").unwrap();
        assert_eq!(read_shell_word(word).unwrap(), script.as_str());
    }

    #[test]
    fn test_list_lists() {
        let script = builder().list_lists();
        let text = script.as_str();
        assert_eq!(script.operation(), Operation::ListLists);
        assert!(text.starts_with("tell application \"Reminders\""));
        assert!(text.contains("name of every list"));
        assert!(text.contains("id of every list"));
        assert!(text.contains("text item delimiters to \", \""));
        assert!(text.contains("namesText & \"|||\" & idsText"));
    }

    #[test]
    fn test_list_reminders_no_filters() {
        let text = builder().list_reminders(&ReminderFilter::default()).to_string();
        assert!(text.contains("set found to (every reminder)"));
        assert!(!text.contains(" of list "));
        assert!(!text.contains("whose"));
    }

    #[test]
    fn test_list_reminders_list_clause_only() {
        let filter = ReminderFilter {
            list_name: Some("Work".into()),
            completed: None,
        };
        let text = builder().list_reminders(&filter).to_string();
        assert!(text.contains("(every reminder of list \"Work\")"));
        assert!(!text.contains("whose"));
    }

    #[test]
    fn test_list_reminders_both_clauses() {
        let filter = ReminderFilter {
            list_name: Some("Work".into()),
            completed: Some(false),
        };
        let text = builder().list_reminders(&filter).to_string();
        assert!(text.contains("(every reminder of list \"Work\" whose completed is false)"));
    }

    #[test]
    fn test_record_line_layout() {
        let text = builder().list_reminders(&ReminderFilter::default()).to_string();
        let line = text
            .lines()
            .find(|l| l.contains("set output to output &"))
            .unwrap();
        assert_eq!(line.matches("\"§§§\"").count(), 8);
        let order = [
            "(name of r)",
            "noteText(body of r)",
            "(completed of r)",
            "(name of container of r)",
            "(id of r)",
            "fmtDate(creation date of r)",
            "fmtDate(modification date of r)",
            "(priority of r)",
            "fmtDate(due date of r)",
        ];
        let positions: Vec<usize> = order.iter().map(|f| line.find(f).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains("on fmtDate(d)"));
        assert!(text.contains("return \"∅∅∅\""));
    }

    #[test]
    fn test_free_text_line_breaks_are_folded() {
        let builder = builder();
        for script in [
            builder.list_reminders(&ReminderFilter::default()),
            builder.search_reminders("x"),
        ] {
            let text = script.to_string();
            assert!(text.contains("on lineText(t)"));
            assert!(text.contains("{return & linefeed, return, linefeed}"));
            assert!(text.contains("to \"¶¶¶\""));
            assert!(text.contains("return lineText(b)"));
            assert!(text.contains("my lineText(name of r)"));
            assert!(text.contains("my lineText(name of container of r)"));
        }
    }

    #[test]
    fn test_create_without_optional_fields() {
        let script = builder().create_reminder(&NewReminder::new("Buy milk", "Personal"));
        let text = script.as_str();
        assert!(text.contains("set targetList to list \"Personal\""));
        assert!(text.contains("with properties {name:\"Buy milk\"}"));
        assert!(text.contains("return id of newReminder"));
        assert!(!text.contains("set body"));
        assert!(!text.contains("set due date"));
        assert!(!text.contains("set priority"));
    }

    #[test]
    fn test_create_with_all_fields() {
        let new = NewReminder::new("Pay rent", "Home")
            .body("transfer")
            .due_date("12/25/2025 9:00 AM")
            .priority(1);
        let text = builder().create_reminder(&new).to_string();
        assert!(text.contains("set body of newReminder to \"transfer\""));
        assert!(text.contains("set due date of newReminder to date \"12/25/2025 9:00 AM\""));
        assert!(text.contains("set priority of newReminder to 1"));
        let body_at = text.find("set body").unwrap();
        let due_at = text.find("set due date").unwrap();
        let prio_at = text.find("set priority").unwrap();
        assert!(body_at < due_at && due_at < prio_at);
    }

    #[test]
    fn test_update_completed_only() {
        let update = ReminderUpdate {
            completed: Some(true),
            ..Default::default()
        };
        let text = builder().update_reminder("abc", &update).to_string();
        let assignments: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| l.starts_with("set ") && l.contains(" of r to "))
            .collect();
        assert_eq!(assignments, vec!["set completed of r to true"]);
        assert!(text.contains("set r to reminder id \"abc\""));
    }

    #[test]
    fn test_update_field_order() {
        let update = ReminderUpdate {
            name: Some("n".into()),
            body: Some("b".into()),
            completed: Some(false),
            due_date: Some("01/02/2026 10:30 PM".into()),
            priority: Some(9),
        };
        let text = builder().update_reminder("abc", &update).to_string();
        let assignments: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| l.contains(" of r to "))
            .collect();
        assert_eq!(
            assignments,
            vec![
                "set name of r to \"n\"",
                "set body of r to \"b\"",
                "set completed of r to false",
                "set due date of r to date \"01/02/2026 10:30 PM\"",
                "set priority of r to 9",
            ]
        );
    }

    #[test]
    fn test_update_empty_body_is_assigned() {
        let update = ReminderUpdate {
            body: Some(String::new()),
            ..Default::default()
        };
        let text = builder().update_reminder("abc", &update).to_string();
        assert!(text.contains("set body of r to \"\""));
    }

    #[test]
    fn test_delete() {
        let text = builder().delete_reminder("x-apple-reminder://1").to_string();
        assert!(text.contains("delete reminder id \"x-apple-reminder://1\""));
    }

    #[test]
    fn test_search() {
        let text = builder().search_reminders("meeting").to_string();
        assert!(text.contains("set searchTerm to \"meeting\""));
        assert!(
            text.contains("((name of r) contains searchTerm) or (noteBody contains searchTerm)")
        );
        assert!(text.contains("repeat with r in (every reminder)"));
    }

    #[test]
    fn test_custom_application() {
        let text = ScriptBuilder::new("Reminders Beta").list_lists().to_string();
        assert!(text.starts_with("tell application \"Reminders Beta\""));
    }

    #[test]
    fn test_adversarial_values_stay_well_formed() {
        let b = builder();
        for value in ADVERSARIAL {
            let filter = ReminderFilter {
                list_name: Some(value.to_string()),
                completed: Some(true),
            };
            assert_well_formed(&b.list_reminders(&filter), &[*value]);

            let new = NewReminder::new(*value, *value).body(*value).due_date(*value);
            assert_well_formed(&b.create_reminder(&new), &[*value]);

            let update = ReminderUpdate {
                name: Some(value.to_string()),
                body: Some(value.to_string()),
                due_date: Some(value.to_string()),
                ..Default::default()
            };
            assert_well_formed(&b.update_reminder(value, &update), &[*value]);
            assert_well_formed(&b.delete_reminder(value), &[*value]);
            assert_well_formed(&b.search_reminders(value), &[*value]);
        }
    }

    #[test]
    fn test_injection_attempt_is_one_literal() {
        let term = "\" & (do shell script \"id\") & \"";
        let script = builder().search_reminders(term);
        let literals = read_literals(script.as_str()).unwrap();
        assert_eq!(literals.iter().filter(|l| l.as_str() == term).count(), 1);
        assert!(!script.as_str().contains("& (do shell script \"id\") &"));
    }
}
