use std::fmt;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A collection the kiosk API can list.
pub trait Resource: Clone + fmt::Debug + Send + Sync + DeserializeOwned + 'static {
    /// Body shape of the list endpoint.
    type Listing: DeserializeOwned + Send;
    const LIST_PATH: &'static str;

    fn unpack(listing: Self::Listing) -> Vec<Self>;
    fn key(&self) -> &str;
}

/// A resource with add / update / delete endpoints and a text-field form.
pub trait Editable: Resource + Serialize + Default + PartialEq {
    type Field: Copy + fmt::Debug + Eq + Send + Sync + 'static;

    const NOUN: &'static str;
    const KEY_FIELD: Self::Field;
    const NAME_FIELD: Self::Field;

    const ADD_PATH: &'static str;
    const UPDATE_PATH: &'static str;
    const DELETE_PATH: &'static str;
    const DELETE_MANY_PATH: &'static str;
    /// Query parameter carrying the key on single delete.
    const KEY_PARAM: &'static str;
    /// Body field carrying the key list on bulk delete.
    const KEYS_FIELD: &'static str;

    fn field(&self, field: Self::Field) -> &str;
    fn set_field(&mut self, field: Self::Field, value: String);
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub class_code: String,
    #[serde(default, serialize_with = "blank_if_none", deserialize_with = "none_if_blank")]
    pub year_level: Option<String>,
    #[serde(default, serialize_with = "blank_if_none", deserialize_with = "none_if_blank")]
    pub email: Option<String>,
    #[serde(default, serialize_with = "blank_if_none", deserialize_with = "none_if_blank")]
    pub phone: Option<String>,
    /// `data:image/...;base64,` URL.
    #[serde(
        default,
        rename = "image_base64",
        serialize_with = "blank_if_none",
        deserialize_with = "none_if_blank"
    )]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentField {
    StudentId,
    FullName,
    ClassCode,
    YearLevel,
    Email,
    Phone,
    Image,
}

impl Resource for Student {
    type Listing = Vec<Student>;
    const LIST_PATH: &'static str = "/students";

    fn unpack(listing: Vec<Student>) -> Vec<Self> {
        listing
    }

    fn key(&self) -> &str {
        &self.student_id
    }
}

impl Editable for Student {
    type Field = StudentField;

    const NOUN: &'static str = "student";
    const KEY_FIELD: StudentField = StudentField::StudentId;
    const NAME_FIELD: StudentField = StudentField::FullName;

    const ADD_PATH: &'static str = "/student/add";
    const UPDATE_PATH: &'static str = "/student/update";
    const DELETE_PATH: &'static str = "/student/delete";
    const DELETE_MANY_PATH: &'static str = "/student/delete-multiple";
    const KEY_PARAM: &'static str = "student_id";
    const KEYS_FIELD: &'static str = "student_ids";

    fn field(&self, field: StudentField) -> &str {
        match field {
            StudentField::StudentId => &self.student_id,
            StudentField::FullName => &self.full_name,
            StudentField::ClassCode => &self.class_code,
            StudentField::YearLevel => self.year_level.as_deref().unwrap_or(""),
            StudentField::Email => self.email.as_deref().unwrap_or(""),
            StudentField::Phone => self.phone.as_deref().unwrap_or(""),
            StudentField::Image => self.image.as_deref().unwrap_or(""),
        }
    }

    fn set_field(&mut self, field: StudentField, value: String) {
        match field {
            StudentField::StudentId => self.student_id = value,
            StudentField::FullName => self.full_name = value,
            StudentField::ClassCode => self.class_code = value,
            StudentField::YearLevel => self.year_level = non_empty(value),
            StudentField::Email => self.email = non_empty(value),
            StudentField::Phone => self.phone = non_empty(value),
            StudentField::Image => self.image = non_empty(value),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub staff_id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default, serialize_with = "blank_if_none", deserialize_with = "none_if_blank")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeacherField {
    StaffId,
    FullName,
    Department,
    Email,
}

impl Resource for Teacher {
    type Listing = StatusReport;
    const LIST_PATH: &'static str = "/teacher/status";

    fn unpack(listing: StatusReport) -> Vec<Self> {
        listing.teachers
    }

    fn key(&self) -> &str {
        &self.staff_id
    }
}

impl Editable for Teacher {
    type Field = TeacherField;

    const NOUN: &'static str = "teacher";
    const KEY_FIELD: TeacherField = TeacherField::StaffId;
    const NAME_FIELD: TeacherField = TeacherField::FullName;

    const ADD_PATH: &'static str = "/staff/add";
    const UPDATE_PATH: &'static str = "/staff/update";
    const DELETE_PATH: &'static str = "/staff/delete";
    const DELETE_MANY_PATH: &'static str = "/staff/delete-multiple";
    const KEY_PARAM: &'static str = "staff_id";
    const KEYS_FIELD: &'static str = "staff_ids";

    fn field(&self, field: TeacherField) -> &str {
        match field {
            TeacherField::StaffId => &self.staff_id,
            TeacherField::FullName => &self.full_name,
            TeacherField::Department => &self.department,
            TeacherField::Email => self.email.as_deref().unwrap_or(""),
        }
    }

    fn set_field(&mut self, field: TeacherField, value: String) {
        match field {
            TeacherField::StaffId => self.staff_id = value,
            TeacherField::FullName => self.full_name = value,
            TeacherField::Department => self.department = value,
            TeacherField::Email => self.email = non_empty(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockStatus {
    #[serde(rename = "LOCK")]
    Locked,
    #[serde(rename = "UNLOCK")]
    Unlocked,
}

impl fmt::Display for LockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            LockStatus::Locked => "LOCKED",
            LockStatus::Unlocked => "UNLOCKED",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub room_id: String,
    #[serde(default)]
    pub room_name: String,
    pub lock_status: LockStatus,
}

/// Body of `GET /teacher/status`, the dashboard feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    #[serde(default)]
    pub teachers: Vec<Teacher>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// The signed-in admin as returned by `/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    #[serde(default)]
    pub full_name: String,
}

/// Acknowledgement body of every write endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_count: Option<u64>,
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Updates only overwrite keys that are present and non-null, so a cleared
/// field has to go out as `""`.
fn blank_if_none<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_deref().unwrap_or(""))
}

fn none_if_blank<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_ignores_server_fields() {
        let json = r#"{
            "_id": "65f0",
            "student_id": "S1",
            "full_name": "Anan",
            "class_code": "1/1",
            "year_level": "M.1",
            "email": "",
            "created_at": "2025-01-01"
        }"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.student_id, "S1");
        assert_eq!(student.year_level.as_deref(), Some("M.1"));
        assert_eq!(student.phone, None);
    }

    #[test]
    fn cleared_optional_field_is_sent_blank() {
        let mut student = Student { student_id: "S1".into(), phone: Some("081".into()), ..Default::default() };
        student.set_field(StudentField::Phone, String::new());
        assert_eq!(student.phone, None);
        let body = serde_json::to_value(&student).unwrap();
        assert_eq!(body["phone"], "");
        assert_eq!(body["email"], "");
        assert_eq!(body["image_base64"], "");
    }

    #[test]
    fn teacher_email_is_always_in_the_body() {
        let mut teacher = Teacher { staff_id: "T1".into(), email: Some("a@school.th".into()), ..Default::default() };
        teacher.set_field(TeacherField::Email, String::new());
        let body = serde_json::to_value(&teacher).unwrap();
        assert_eq!(body["email"], "");
    }

    #[test]
    fn blank_and_null_read_back_as_missing() {
        let json = r#"{"student_id": "S1", "email": "", "phone": null, "image_base64": ""}"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.email, None);
        assert_eq!(student.phone, None);
        assert_eq!(student.image, None);
    }

    #[test]
    fn status_report_parses_lock_states() {
        let json = r#"{
            "teachers": [{"staff_id": "T1", "full_name": "Kru Somchai", "department": "Science", "schedule": []}],
            "rooms": [
                {"room_id": "R1", "room_name": "Lab", "lock_status": "UNLOCK"},
                {"room_id": "R2", "room_name": "Library", "lock_status": "LOCK"}
            ],
            "timestamp": "2025-01-01T08:00:00"
        }"#;
        let report: StatusReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.rooms[0].lock_status, LockStatus::Unlocked);
        assert_eq!(report.rooms[1].lock_status.to_string(), "LOCKED");
        assert_eq!(Teacher::unpack(report)[0].key(), "T1");
    }
}
