use std::collections::BTreeMap;
use crate::records::{Student, Teacher};

pub const UNKNOWN_BUCKET: &str = "Unknown";

/// Fields the search box matches against.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Student {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.full_name.as_str(), self.student_id.as_str(), self.class_code.as_str()]
    }
}

impl Searchable for Teacher {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.full_name.as_str(), self.staff_id.as_str()]
    }
}

/// Case-insensitive substring filter; a blank query keeps everything.
pub fn project<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| {
            item.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

pub type YearGroups<'a> = BTreeMap<String, BTreeMap<String, Vec<&'a Student>>>;

/// Year level, then class code, both sorted. Blank values go to "Unknown".
pub fn group_by_year_and_class<'a>(students: &[&'a Student]) -> YearGroups<'a> {
    let mut groups: YearGroups<'a> = BTreeMap::new();
    for student in students {
        let year = bucket(student.year_level.as_deref());
        let class = bucket(Some(student.class_code.as_str()));
        groups.entry(year).or_default().entry(class).or_default().push(*student);
    }
    groups
}

fn bucket(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => UNKNOWN_BUCKET.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: &str, name: &str, class: &str, year: Option<&str>) -> Student {
        Student {
            student_id: id.into(),
            full_name: name.into(),
            class_code: class.into(),
            year_level: year.map(str::to_string),
            ..Default::default()
        }
    }

    fn roster() -> Vec<Student> {
        vec![
            student("S1", "Anan Srisuk", "1/1", Some("M.1")),
            student("S2", "Boonmee", "2/3", Some("M.2")),
            student("s3", "Chai", "1/2", None),
        ]
    }

    #[test]
    fn empty_query_returns_everything() {
        let roster = roster();
        assert_eq!(project(&roster, "").len(), 3);
        assert_eq!(project(&roster, "   ").len(), 3);
    }

    #[test]
    fn matching_is_case_insensitive_across_fields() {
        let roster = roster();
        let by_name: Vec<_> = project(&roster, "ANAN").into_iter().map(|s| s.student_id.as_str()).collect();
        assert_eq!(by_name, vec!["S1"]);
        let by_id: Vec<_> = project(&roster, "S3").into_iter().map(|s| s.full_name.as_str()).collect();
        assert_eq!(by_id, vec!["Chai"]);
        let by_class = project(&roster, "2/3");
        assert_eq!(by_class.len(), 1);
        assert!(project(&roster, "nobody").is_empty());
    }

    #[test]
    fn every_result_matches_some_field() {
        let roster = roster();
        for query in ["s", "1/", "oo", "m"] {
            for hit in project(&roster, query) {
                assert!(hit.search_fields().iter().any(|f| f.to_lowercase().contains(query)));
            }
        }
    }

    #[test]
    fn teachers_are_searched_by_name_and_staff_id() {
        let staff = vec![
            Teacher { staff_id: "T1".into(), full_name: "Kru Somchai".into(), department: "Math".into(), email: None },
            Teacher { staff_id: "T2".into(), full_name: "Kru Malee".into(), department: "Science".into(), email: None },
        ];
        assert_eq!(project(&staff, "malee")[0].staff_id, "T2");
        assert!(project(&staff, "science").is_empty());
    }

    #[test]
    fn missing_year_lands_in_unknown_bucket() {
        let roster = roster();
        let visible: Vec<&Student> = roster.iter().collect();
        let groups = group_by_year_and_class(&visible);
        let years: Vec<_> = groups.keys().cloned().collect();
        assert_eq!(years, vec!["M.1", "M.2", UNKNOWN_BUCKET]);
        assert_eq!(groups[UNKNOWN_BUCKET]["1/2"][0].student_id, "s3");
        let total: usize = groups.values().flat_map(|classes| classes.values()).map(Vec::len).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn classes_are_sorted_within_a_year() {
        let roster = vec![
            student("S1", "A", "1/3", Some("M.1")),
            student("S2", "B", "1/1", Some("M.1")),
            student("S3", "C", "", Some("M.1")),
        ];
        let visible: Vec<&Student> = roster.iter().collect();
        let groups = group_by_year_and_class(&visible);
        let classes: Vec<_> = groups["M.1"].keys().cloned().collect();
        assert_eq!(classes, vec!["1/1", "1/3", UNKNOWN_BUCKET]);
    }
}
