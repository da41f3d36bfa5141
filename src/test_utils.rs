// SPDX-License-Identifier: MPL-2.0
//! Test helpers shared by unit and integration tests.

use crate::notifications::{Attachment, Surface, ToastProps, UnitId};
use std::collections::BTreeMap;

/// One call made by the manager on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    Mount {
        unit: UnitId,
        attachment: Attachment,
        props: ToastProps,
    },
    Update {
        unit: UnitId,
        props: ToastProps,
    },
    Destroy {
        unit: UnitId,
    },
}

/// Surface that renders nothing and remembers every call.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    next_unit: u64,
    live: BTreeMap<UnitId, ToastProps>,
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    /// Every call in order.
    #[must_use]
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Latest props of a live unit.
    #[must_use]
    pub fn props(&self, unit: UnitId) -> Option<&ToastProps> {
        self.live.get(&unit)
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn is_destroyed(&self, unit: UnitId) -> bool {
        self.calls
            .iter()
            .any(|call| matches!(call, SurfaceCall::Destroy { unit: u } if *u == unit))
    }
}

impl Surface for RecordingSurface {
    fn mount(&mut self, attachment: &Attachment, props: ToastProps) -> UnitId {
        let unit = UnitId(self.next_unit);
        self.next_unit += 1;
        self.calls.push(SurfaceCall::Mount {
            unit,
            attachment: attachment.clone(),
            props: props.clone(),
        });
        self.live.insert(unit, props);
        unit
    }

    fn update(&mut self, unit: UnitId, props: &ToastProps) {
        self.calls.push(SurfaceCall::Update {
            unit,
            props: props.clone(),
        });
        if let Some(live) = self.live.get_mut(&unit) {
            *live = props.clone();
        }
    }

    fn destroy(&mut self, unit: UnitId) {
        self.calls.push(SurfaceCall::Destroy { unit });
        self.live.remove(&unit);
    }
}
