/*
 * Copyright (c) Huawei Technologies Co., Ltd. 2025. All rights reserved.
 * Global Trust Authority is licensed under the Mulan PSL v2.
 * You can use this software according to the terms and conditions of the Mulan PSL v2.
 * You may obtain a copy of Mulan PSL v2 at:
 *     http://license.coscl.org.cn/MulanPSL2
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND, EITHER EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR
 * PURPOSE.
 * See the Mulan PSL v2 for more details.
 */

mod check;
mod data_check;
mod digest_check;
mod event;
mod measured;
mod policy;
mod report;

pub use check::{check_log, check_log_from_buffer, check_log_from_file, LogCheckOptions};
pub use data_check::{check_event_data, HCRTM_EVENT_DATA, OMIT_BOOT_DEVICE_EVENTS_DATA};
pub use event::model::{
    EfiVariableData, Event, EventData, EventType, GrubCmdData, KernelCmdlineData,
    SystemdStubCmdlineData, TpmDigestEntry,
};
pub use event::stream::{EventStream, OpenEventStream, StreamItem};
pub use measured::{determine_measured_bytes, SEPARATOR_ERROR_VALUE, SEPARATOR_NORMAL_VALUES};
pub use policy::is_expected_event_type_for_index;
pub use report::{LogCheckReport, ReportEntry};
