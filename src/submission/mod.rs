// Copyright (c) Anuncios Team
// SPDX-License-Identifier: Apache-2.0

pub mod parse;
pub mod pricing;
pub mod schema;
pub mod serialize;

pub use parse::ParsedSubmission;
pub use serialize::{serialize_draft, FilePart, MultipartPayload, Part, PartValue};
