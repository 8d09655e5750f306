//! Error/success banner shown above a page's forms.

use yew::prelude::*;

use crate::page_state::Notice;

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Option<Notice>,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    match &props.notice {
        Some(Notice::Error(message)) => html! { <div class="error">{ message }</div> },
        Some(Notice::Success(message)) => html! { <div class="success">{ message }</div> },
        None => html! {},
    }
}
