// tests/support/builders.rs
use recruit_admin_core::application::commands::recruitment::RecruitmentPostForm;
use recruit_admin_core::domain::recruitment::{PostContent, PostStatus};

pub struct PostFormBuilder {
    form: RecruitmentPostForm,
}

impl PostFormBuilder {
    pub fn new() -> Self {
        Self {
            form: RecruitmentPostForm {
                title: "Dược sĩ bán hàng".into(),
                description: "Tư vấn và bán thuốc tại quầy".into(),
                ..RecruitmentPostForm::default()
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.form.title = title.into();
        self
    }

    pub fn salary(mut self, min: u64, max: u64) -> Self {
        self.form.salary_min = Some(min);
        self.form.salary_max = Some(max);
        self
    }

    pub fn status(mut self, status: PostStatus) -> Self {
        self.form.status = status;
        self
    }

    pub fn location(mut self, id: impl Into<String>) -> Self {
        self.form.location_id = Some(id.into());
        self
    }

    pub fn build(self) -> RecruitmentPostForm {
        self.form
    }
}

pub fn post_content(title: &str, status: PostStatus) -> PostContent {
    PostContent {
        title: title.into(),
        description: "Mô tả công việc".into(),
        salary_currency: "VND".into(),
        status,
        ..PostContent::default()
    }
}
