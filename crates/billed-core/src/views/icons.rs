use maud::PreEscaped;

pub(crate) const WINDOW_ICON: PreEscaped<&str> = PreEscaped(
    r#"<svg width="24" height="24" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><rect x="3" y="4" width="18" height="16" rx="2" fill="none" stroke="currentColor" stroke-width="2"/><line x1="3" y1="9" x2="21" y2="9" stroke="currentColor" stroke-width="2"/></svg>"#,
);

pub(crate) const MAIL_ICON: PreEscaped<&str> = PreEscaped(
    r#"<svg width="24" height="24" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><rect x="3" y="5" width="18" height="14" rx="2" fill="none" stroke="currentColor" stroke-width="2"/><polyline points="3,6 12,13 21,6" fill="none" stroke="currentColor" stroke-width="2"/></svg>"#,
);

pub(crate) const DISCONNECT_ICON: PreEscaped<&str> = PreEscaped(
    r#"<svg width="24" height="24" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><path d="M10 4H5v16h5" fill="none" stroke="currentColor" stroke-width="2"/><polyline points="15,8 19,12 15,16" fill="none" stroke="currentColor" stroke-width="2"/><line x1="9" y1="12" x2="19" y2="12" stroke="currentColor" stroke-width="2"/></svg>"#,
);

pub(crate) const EYE_ICON: PreEscaped<&str> = PreEscaped(
    r##"<svg width="20" height="20" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><path d="M1 12s4-7 11-7 11 7 11 7-4 7-11 7S1 12 1 12z" fill="none" stroke="#0E5AE5" stroke-width="2"/><circle cx="12" cy="12" r="3" fill="none" stroke="#0E5AE5" stroke-width="2"/></svg>"##,
);
