//! User-visible wording in both supported languages

use chrono::Weekday;

use crate::core::{DisplayState, SessionStatus, SessionType, Shift, WeekPhase};
use crate::state::Language;

pub(super) struct Labels {
    pub(super) today: &'static str,
    pub(super) week: &'static str,
    pub(super) month: &'static str,
    pub(super) semester: &'static str,
    pub(super) next: &'static str,
    pub(super) course: &'static str,
    pub(super) code: &'static str,
    pub(super) room: &'static str,
    pub(super) class: &'static str,
    pub(super) slot: &'static str,
    pub(super) time: &'static str,
    pub(super) kind: &'static str,
    pub(super) status: &'static str,
    pub(super) date: &'static str,
    pub(super) sessions: &'static str,
    pub(super) periods: &'static str,
    pub(super) progress: &'static str,
    pub(super) theory: &'static str,
    pub(super) practice: &'static str,
    pub(super) completed_periods: &'static str,
    pub(super) weekday: &'static str,
    pub(super) teacher: &'static str,
    pub(super) academic_year: &'static str,
    pub(super) theme: &'static str,
    pub(super) language: &'static str,
    pub(super) overrides: &'static str,
    pub(super) abbreviations: &'static str,
    pub(super) none: &'static str,
    pub(super) data_location: &'static str,
    pub(super) version: &'static str,
    pub(super) conflicts: &'static str,
    pub(super) flagged_conflicts: &'static str,
    pub(super) overview_title: &'static str,
    pub(super) stats_title: &'static str,
    pub(super) settings_title: &'static str,
    pub(super) about_title: &'static str,
    pub(super) no_data: &'static str,
    pub(super) no_data_hint: &'static str,
    pub(super) after_semester: &'static str,
    pub(super) no_sessions_today: &'static str,
    pub(super) no_more_teaching: &'static str,
    pub(super) starts_in_days: &'static str,
}

const VI: Labels = Labels {
    today: "Hôm nay",
    week: "Tuần",
    month: "Tháng",
    semester: "Học kỳ",
    next: "Tiếp theo",
    course: "Môn học",
    code: "Mã môn",
    room: "Phòng",
    class: "Lớp",
    slot: "Tiết",
    time: "Giờ",
    kind: "Loại",
    status: "Trạng thái",
    date: "Ngày",
    sessions: "Buổi",
    periods: "Số tiết",
    progress: "Tiến độ",
    theory: "Lý thuyết",
    practice: "Thực hành",
    completed_periods: "Đã dạy",
    weekday: "Thứ",
    teacher: "Giảng viên",
    academic_year: "Năm học",
    theme: "Giao diện",
    language: "Ngôn ngữ",
    overrides: "Sửa loại buổi",
    abbreviations: "Tên viết tắt",
    none: "(không có)",
    data_location: "Dữ liệu",
    version: "Phiên bản",
    conflicts: "Trùng lịch",
    flagged_conflicts: "Buổi được đánh dấu trùng",
    overview_title: "Tổng quan học kỳ",
    stats_title: "Thống kê",
    settings_title: "Cài đặt",
    about_title: "Giới thiệu",
    no_data: "Chưa có lịch giảng.",
    no_data_hint: "Dùng `teachdash load <tệp>` hoặc `teachdash demo <mã>` để nạp lịch.",
    after_semester: "Học kỳ đã kết thúc.",
    no_sessions_today: "Hôm nay không có lịch giảng.",
    no_more_teaching: "Không còn buổi giảng nào trong học kỳ.",
    starts_in_days: "Học kỳ bắt đầu sau {days} ngày ({date}).",
};

const EN: Labels = Labels {
    today: "Today",
    week: "Week",
    month: "Month",
    semester: "Semester",
    next: "Next",
    course: "Course",
    code: "Code",
    room: "Room",
    class: "Class",
    slot: "Periods",
    time: "Time",
    kind: "Type",
    status: "Status",
    date: "Date",
    sessions: "Sessions",
    periods: "Periods",
    progress: "Progress",
    theory: "Theory",
    practice: "Practice",
    completed_periods: "Taught",
    weekday: "Weekday",
    teacher: "Teacher",
    academic_year: "Academic year",
    theme: "Theme",
    language: "Language",
    overrides: "Type overrides",
    abbreviations: "Abbreviations",
    none: "(none)",
    data_location: "Data",
    version: "Version",
    conflicts: "Conflicts",
    flagged_conflicts: "Sessions flagged as conflicting",
    overview_title: "Semester overview",
    stats_title: "Statistics",
    settings_title: "Settings",
    about_title: "About",
    no_data: "No schedule loaded.",
    no_data_hint: "Use `teachdash load <file>` or `teachdash demo <code>` to load one.",
    after_semester: "The semester has ended.",
    no_sessions_today: "No teaching today.",
    no_more_teaching: "No teaching left this semester.",
    starts_in_days: "The semester starts in {days} day(s) ({date}).",
};

impl Labels {
    pub(super) fn get(language: Language) -> &'static Labels {
        match language {
            Language::Vi => &VI,
            Language::En => &EN,
        }
    }

    pub(super) fn starts_in(&self, days: i64, date: &str) -> String {
        self.starts_in_days
            .replace("{days}", &days.to_string())
            .replace("{date}", date)
    }
}

pub(super) fn weekday_label(weekday: Weekday, language: Language) -> &'static str {
    match language {
        Language::Vi => match weekday {
            Weekday::Mon => "Thứ 2",
            Weekday::Tue => "Thứ 3",
            Weekday::Wed => "Thứ 4",
            Weekday::Thu => "Thứ 5",
            Weekday::Fri => "Thứ 6",
            Weekday::Sat => "Thứ 7",
            Weekday::Sun => "Chủ nhật",
        },
        Language::En => match weekday {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        },
    }
}

pub(super) fn shift_label(shift: Shift, language: Language) -> &'static str {
    match (language, shift) {
        (Language::Vi, Shift::Morning) => "Sáng",
        (Language::Vi, Shift::Afternoon) => "Chiều",
        (Language::Vi, Shift::Evening) => "Tối",
        (Language::En, Shift::Morning) => "Morning",
        (Language::En, Shift::Afternoon) => "Afternoon",
        (Language::En, Shift::Evening) => "Evening",
    }
}

pub(super) fn status_label(status: SessionStatus, language: Language) -> &'static str {
    match (language, status) {
        (Language::Vi, SessionStatus::Live) => "Đang dạy",
        (Language::Vi, SessionStatus::Pending) => "Sắp tới",
        (Language::Vi, SessionStatus::Completed) => "Đã xong",
        (Language::En, SessionStatus::Live) => "Live",
        (Language::En, SessionStatus::Pending) => "Pending",
        (Language::En, SessionStatus::Completed) => "Completed",
    }
}

pub(super) fn type_label(session_type: SessionType, language: Language) -> &'static str {
    let labels = Labels::get(language);
    match session_type {
        SessionType::Theory => labels.theory,
        SessionType::Practice => labels.practice,
    }
}

pub(super) fn phase_label(phase: WeekPhase, language: Language) -> &'static str {
    match (language, phase) {
        (Language::Vi, WeekPhase::Past) => "Đã qua",
        (Language::Vi, WeekPhase::Current) => "Tuần này",
        (Language::Vi, WeekPhase::Upcoming) => "Sắp tới",
        (Language::En, WeekPhase::Past) => "Past",
        (Language::En, WeekPhase::Current) => "Current",
        (Language::En, WeekPhase::Upcoming) => "Upcoming",
        (_, WeekPhase::Unknown) => "?",
    }
}

pub(super) fn state_label(state: DisplayState, language: Language) -> &'static str {
    match (language, state) {
        (Language::Vi, DisplayState::NoData) => "Chưa có lịch",
        (Language::Vi, DisplayState::BeforeSemester) => "Chưa vào học kỳ",
        (Language::Vi, DisplayState::AfterSemester) => "Hết học kỳ",
        (Language::Vi, DisplayState::HasSessions) => "Có lịch hôm nay",
        (Language::Vi, DisplayState::NoSessions) => "Hôm nay nghỉ",
        (Language::En, DisplayState::NoData) => "No schedule",
        (Language::En, DisplayState::BeforeSemester) => "Before semester",
        (Language::En, DisplayState::AfterSemester) => "Semester over",
        (Language::En, DisplayState::HasSessions) => "Teaching today",
        (Language::En, DisplayState::NoSessions) => "Free today",
    }
}
