// Copyright (c) Anuncios Team
// SPDX-License-Identifier: Apache-2.0

pub mod health;
pub mod listings;
