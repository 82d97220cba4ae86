use crate::domain::TimetableEntry;

/// Appends an assignment id to the entry for `day`, creating the entry
/// (with no lessons) when the day is not scheduled yet. Entries stay
/// sorted ascending by day.
pub fn place_assignment(timetable: &mut Vec<TimetableEntry>, day: u32, assignment_id: &str) {
    match timetable.iter_mut().find(|e| e.day == day) {
        Some(entry) => entry.assignment_ids.push(assignment_id.to_string()),
        None => {
            timetable.push(TimetableEntry {
                day,
                lesson_ids: Vec::new(),
                assignment_ids: vec![assignment_id.to_string()],
            });
            timetable.sort_by_key(|e| e.day);
        }
    }
}

/// Strips an assignment id from every entry. There is no prior-day lookup;
/// the whole track is scanned.
pub fn unplace_assignment(timetable: &mut [TimetableEntry], assignment_id: &str) {
    for entry in timetable.iter_mut() {
        entry.assignment_ids.retain(|id| id != assignment_id);
    }
}

/// Drops entries that schedule nothing. An entry with both id lists empty
/// must not survive an assignment move.
pub fn prune_empty(timetable: &mut Vec<TimetableEntry>) {
    timetable.retain(|e| !e.lesson_ids.is_empty() || !e.assignment_ids.is_empty());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: u32, lessons: &[&str], assignments: &[&str]) -> TimetableEntry {
        TimetableEntry {
            day,
            lesson_ids: lessons.iter().map(|s| s.to_string()).collect(),
            assignment_ids: assignments.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn place_creates_entry_and_keeps_order() {
        let mut tt = vec![entry(1, &["l-1"], &[]), entry(10, &[], &["a-1"])];
        place_assignment(&mut tt, 5, "a-2");
        let days: Vec<u32> = tt.iter().map(|e| e.day).collect();
        assert_eq!(days, vec![1, 5, 10]);
        assert_eq!(tt[1].lesson_ids, Vec::<String>::new());
        assert_eq!(tt[1].assignment_ids, vec!["a-2".to_string()]);
    }

    #[test]
    fn place_appends_to_existing_day() {
        let mut tt = vec![entry(5, &[], &["a-1"])];
        place_assignment(&mut tt, 5, "a-2");
        assert_eq!(tt.len(), 1);
        assert_eq!(
            tt[0].assignment_ids,
            vec!["a-1".to_string(), "a-2".to_string()]
        );
    }

    #[test]
    fn unplace_scans_every_entry() {
        let mut tt = vec![entry(1, &[], &["a-1", "a-2"]), entry(3, &[], &["a-1"])];
        unplace_assignment(&mut tt, "a-1");
        assert_eq!(tt[0].assignment_ids, vec!["a-2".to_string()]);
        assert!(tt[1].assignment_ids.is_empty());
    }

    #[test]
    fn prune_keeps_entries_with_lessons() {
        let mut tt = vec![entry(1, &["l-1"], &[]), entry(2, &[], &[])];
        prune_empty(&mut tt);
        assert_eq!(tt.len(), 1);
        assert_eq!(tt[0].day, 1);
    }
}
