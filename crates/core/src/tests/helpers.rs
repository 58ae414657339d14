// Copyright (C) 2026 The landreg Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;
use landreg_domain::{Employee, Record, RecordStatus, Role, UserContext};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A plausible received record with stable defaults; tests overwrite the
/// fields they care about.
pub fn create_test_record(id: u64, status: RecordStatus) -> Record {
    Record {
        id,
        code: format!("HS-2024/{id:04}"),
        customer_name: format!("Nguyễn Văn {id}"),
        phone: format!("0912000{id:03}"),
        ward: String::from("phường Tân Phú"),
        land_plot: String::from("125"),
        map_sheet: String::from("42"),
        area: Some(240.0),
        received_date: Some(date(2024, 1, 2)),
        deadline: Some(date(2024, 1, 22)),
        assigned_date: None,
        completed_date: None,
        export_date: None,
        result_returned_date: None,
        status,
        assigned_to: None,
        export_batch: None,
        needs_map_correction: false,
    }
}

pub fn create_admin() -> UserContext {
    UserContext::new(Role::Admin, None)
}

pub fn create_employee_user(employee_id: &str) -> UserContext {
    UserContext::new(Role::Employee, Some(String::from(employee_id)))
}

pub fn create_team_leader(employee_id: &str) -> UserContext {
    UserContext::new(Role::TeamLeader, Some(String::from(employee_id)))
}

pub fn create_roster() -> Vec<Employee> {
    vec![
        Employee::new(
            String::from("tl-01"),
            String::from("Trần Thị Lãnh"),
            vec![String::from("Chơn Thành"), String::from("Tân Phú")],
        ),
        Employee::new(
            String::from("nv-07"),
            String::from("Lê Văn Bảy"),
            Vec::new(),
        ),
    ]
}
