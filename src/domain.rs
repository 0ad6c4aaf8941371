use serde::{Deserialize, Serialize};

/// A single employee record in the canonical schema.
///
/// Every record carries exactly these six fields; values a source file never
/// supplied stay at their empty-string default. Field declaration order is
/// the fixed display order for reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub email: String,
    pub name: String,
    pub department: String,
    pub hours_worked: String,
    pub hourly_rate: String,
}

impl Employee {
    pub fn field(&self, field: CanonicalField) -> &str {
        match field {
            CanonicalField::Id => &self.id,
            CanonicalField::Email => &self.email,
            CanonicalField::Name => &self.name,
            CanonicalField::Department => &self.department,
            CanonicalField::HoursWorked => &self.hours_worked,
            CanonicalField::HourlyRate => &self.hourly_rate,
        }
    }

    pub fn set_field(&mut self, field: CanonicalField, value: String) {
        match field {
            CanonicalField::Id => self.id = value,
            CanonicalField::Email => self.email = value,
            CanonicalField::Name => self.name = value,
            CanonicalField::Department => self.department = value,
            CanonicalField::HoursWorked => self.hours_worked = value,
            CanonicalField::HourlyRate => self.hourly_rate = value,
        }
    }
}

/// The six canonical fields all source columns are mapped onto.
///
/// `ALL` lists the variants in declared order; header resolution scans fields
/// in that order, so it doubles as the match-priority order when a header
/// could satisfy more than one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    Id,
    Email,
    Name,
    Department,
    HoursWorked,
    HourlyRate,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 6] = [
        CanonicalField::Id,
        CanonicalField::Email,
        CanonicalField::Name,
        CanonicalField::Department,
        CanonicalField::HoursWorked,
        CanonicalField::HourlyRate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::Id => "id",
            CanonicalField::Email => "email",
            CanonicalField::Name => "name",
            CanonicalField::Department => "department",
            CanonicalField::HoursWorked => "hours_worked",
            CanonicalField::HourlyRate => "hourly_rate",
        }
    }

    /// Keyword substrings that identify a raw header as this field.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            CanonicalField::Id => &["id", "identifier", "emp_id", "employee_id"],
            CanonicalField::Email => &["email", "e-mail", "mail", "contact"],
            CanonicalField::Name => &["name", "full_name", "employee_name"],
            CanonicalField::Department => &["department", "dept", "team"],
            CanonicalField::HoursWorked => &["hours_worked", "hours", "work_hours"],
            CanonicalField::HourlyRate => &["hourly_rate", "rate", "salary", "wage", "hour_rate"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_accessors_cover_all_variants() {
        let mut employee = Employee::default();
        for field in CanonicalField::ALL {
            assert_eq!(employee.field(field), "");
            employee.set_field(field, field.as_str().to_string());
        }
        assert_eq!(employee.id, "id");
        assert_eq!(employee.hourly_rate, "hourly_rate");
    }

    #[test]
    fn test_every_field_has_keywords() {
        for field in CanonicalField::ALL {
            assert!(!field.keywords().is_empty());
        }
    }
}
