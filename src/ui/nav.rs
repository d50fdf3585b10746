//! Mobile navigation menu show / hide.

use crate::constants::SHOW_MENU_CLASS;
use crate::dom_utils::ClassTarget;

pub fn open_menu<T: ClassTarget + ?Sized>(menu: &T) {
    menu.add_class(SHOW_MENU_CLASS);
}

pub fn close_menu<T: ClassTarget + ?Sized>(menu: &T) {
    menu.remove_class(SHOW_MENU_CLASS);
}
