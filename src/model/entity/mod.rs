mod tenant;
pub use tenant::{Tenant, TenantCreate};

mod user;
pub use user::{Membership, TenantMember, UserEntity, UserEntityCreate};

mod vitrine;
pub use vitrine::{Vitrine, VitrineCreate};

mod course;
pub use course::{Course, CourseCreate};

mod section;
pub use section::{Section, SectionCreate};

mod module;
pub use module::{Module, ModuleCreate};

mod lesson;
pub use lesson::{Lesson, LessonCreate};

mod user_event;
pub use user_event::{ActivitySummary, EventFilter, EventTypeCount, UserEvent, UserEventCreate};

mod system_log;
pub use system_log::{LogFilter, SystemLog, SystemLogCreate};
