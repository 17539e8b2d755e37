//! Page footer with copyright year and tagline.

use leptos::prelude::*;

use crate::content::TAGLINE;
use crate::util::clock::copyright_notice;

#[component]
pub fn SiteFooter(year: i32) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__inner">
                <p>{copyright_notice(year)}</p>
                <p class="site-footer__tagline">{TAGLINE}</p>
            </div>
        </footer>
    }
}
