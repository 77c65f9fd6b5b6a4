// src/exclusions.rs
//! Files that are never linted: generated code and headers cpplint cannot parse.

#![deny(missing_docs)]

use crate::path::{FilePath, FileSet};

/// Paths of the upstream tree, relative to the project root.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    "atom/browser/mac/atom_application.h",
    "atom/browser/mac/atom_application_delegate.h",
    "atom/browser/resources/win/resource.h",
    "atom/browser/ui/cocoa/atom_menu_controller.h",
    "atom/browser/ui/cocoa/atom_touch_bar.h",
    "atom/browser/ui/cocoa/touch_bar_forward_declarations.h",
    "atom/browser/ui/cocoa/NSColor+Hex.h",
    "atom/browser/ui/cocoa/NSString+ANSI.h",
    "atom/common/api/api_messages.h",
    "atom/common/common_message_generator.cc",
    "atom/common/common_message_generator.h",
    "brightray/browser/mac/bry_inspectable_web_contents_view.h",
    "brightray/browser/mac/event_dispatching_window.h",
    "brightray/browser/mac/notification_center_delegate.h",
    "brightray/browser/win/notification_presenter_win7.h",
    "brightray/browser/win/win32_desktop_notifications/common.h",
    "brightray/browser/win/win32_desktop_notifications/desktop_notification_controller.cc",
    "brightray/browser/win/win32_desktop_notifications/desktop_notification_controller.h",
    "brightray/browser/win/win32_desktop_notifications/toast.h",
    "brightray/browser/win/win32_notification.h",
];

/// A fixed set of root-relative paths removed from every run.
///
/// Entries are kept as declared and normalized only when the set is built
/// for comparison.
#[derive(Debug, Clone, Default)]
pub struct Exclusions {
    declared: Vec<String>,
}

impl Exclusions {
    /// Build from declared paths.
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            declared: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in list.
    pub fn builtin() -> Self {
        Self::new(DEFAULT_EXCLUDES.iter().copied())
    }

    /// Paths as declared.
    pub fn declared(&self) -> &[String] {
        &self.declared
    }

    /// Canonical set used for subtraction.
    pub fn to_set(&self) -> FileSet {
        self.declared.iter().map(FilePath::new).collect()
    }
}
