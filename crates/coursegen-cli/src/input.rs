// Dweve Coursegen - Course Outline Structure Generator
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CSV input reading.
//!
//! The tabular reader is a thin collaborator: it hands the core an ordered
//! sequence of raw string fields and nothing else. Rows have no headers
//! and may vary in width; trimming and filtering are the normalizer's job.

use crate::error::{CliError, Result};
use std::path::Path;

/// Read all records from a CSV file as raw field lists.
pub fn read_records(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| CliError::Input {
            path: path.to_path_buf(),
            source,
        })?;

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| CliError::Input {
            path: path.to_path_buf(),
            source,
        })?;
        records.push(record.iter().map(str::to_string).collect());
    }
    Ok(records)
}
