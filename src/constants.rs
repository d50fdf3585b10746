// Element ids the page markup must provide
pub const NAV_MENU_ID: &str = "nav-menu";
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_CLOSE_ID: &str = "nav-close";
pub const HEADER_ID: &str = "header";
pub const SCROLL_UP_ID: &str = "scroll-up";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_MESSAGE_ID: &str = "contact-message";
pub const CONTACT_USER_ID: &str = "contact-user";

// Selectors
pub const NAV_LINK_SELECTOR: &str = ".nav__link";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const SUBMIT_BUTTON_SELECTOR: &str = "button[type='submit'], input[type='submit']";

// CSS classes toggled by the controller
pub const SHOW_MENU_CLASS: &str = "show-menu";
pub const HEADER_SCROLLED_CLASS: &str = "bg-header";
pub const SCROLL_UP_VISIBLE_CLASS: &str = "show-scroll";
pub const ACTIVE_LINK_CLASS: &str = "active-link";
pub const STATUS_ERROR_CLASS: &str = "color-red";
pub const STATUS_SUCCESS_CLASS: &str = "color-green";

// Scroll thresholds (px)
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;
pub const SCROLL_UP_THRESHOLD: f64 = 350.0;
pub const SECTION_HEADER_OFFSET: f64 = 58.0;

// Contact form
pub const STATUS_CLEAR_DELAY_MS: u32 = 3000;
pub const MSG_EMAIL_REQUIRED: &str = "You must enter your E-mail !!";
pub const MSG_REGISTERED: &str = "You Registered Successfully !!";
pub const MSG_RELAY_FAILED: &str = "Oops! Something went wrong...";

// Reveal animation defaults
pub const REVEAL_DISTANCE: &str = "60px";
pub const REVEAL_DURATION_MS: u32 = 2500;
pub const REVEAL_DELAY_MS: u32 = 400;
