use chrono::Utc;

use super::*;

impl User {
    /// Inscribe al usuario en un curso. Reinscribirse no duplica la
    /// entrada, solo refresca el último acceso.
    pub fn enroll_course(&mut self, course_id: &str, title: &str) {
        if let Some(course) = self
            .enrolled_courses
            .iter_mut()
            .find(|c| c.course_id == course_id)
        {
            course.last_accessed = Utc::now();
            return;
        }

        self.enrolled_courses.push(EnrolledCourse {
            course_id: course_id.to_string(),
            title: title.to_string(),
            progress: 0,
            completed: false,
            last_accessed: Utc::now(),
        });
    }

    /// Actualiza el avance de un curso (porcentaje 0-100, recortado) y
    /// sella el último acceso. Al llegar a 100 el curso queda
    /// completado; la marca no se retira aunque el porcentaje baje.
    pub fn touch_course(&mut self, course_id: &str, progress: u8) {
        let course = match self
            .enrolled_courses
            .iter_mut()
            .find(|c| c.course_id == course_id)
        {
            Some(c) => c,
            None => return,
        };

        course.progress = progress.min(100);
        if course.progress == 100 {
            course.completed = true;
        }
        course.last_accessed = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enrolling_twice_keeps_one_entry() {
        let mut user = User::new("u1", "ana");
        user.enroll_course("c1", "Rust desde cero");
        user.enroll_course("c1", "Rust desde cero");
        assert_eq!(user.enrolled_courses.len(), 1);
    }

    #[test]
    fn progress_is_clamped_and_completes_at_100() {
        let mut user = User::new("u1", "ana");
        user.enroll_course("c1", "Rust desde cero");

        user.touch_course("c1", 73);
        assert_eq!(user.enrolled_courses[0].progress, 73);
        assert!(!user.enrolled_courses[0].completed);

        user.touch_course("c1", 250);
        assert_eq!(user.enrolled_courses[0].progress, 100);
        assert!(user.enrolled_courses[0].completed);

        // La marca de completado no se retira
        user.touch_course("c1", 40);
        assert!(user.enrolled_courses[0].completed);
    }

    #[test]
    fn touching_an_unknown_course_is_a_no_op() {
        let mut user = User::new("u1", "ana");
        user.touch_course("c9", 50);
        assert!(user.enrolled_courses.is_empty());
    }
}
