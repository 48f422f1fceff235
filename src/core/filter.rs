use crate::core::tables::COURSE_KEYWORDS;
use crate::domain::model::CourseRecord;

/// Keeps records whose title or snippet mention a course-like word.
pub fn is_course_like(record: &CourseRecord) -> bool {
    let text = format!("{} {}", record.title, record.snippet).to_lowercase();
    COURSE_KEYWORDS.iter().any(|word| text.contains(word))
}
