use std::rc::Rc;

use common::model::template::TemplateDocument;
use yew::prelude::*;

use crate::api::templates::TemplatesApi;

#[derive(Properties, PartialEq, Clone)]
pub struct PreviewPlayerProps {
    pub document: Rc<TemplateDocument>,
    pub api: TemplatesApi,
    /// Shows the share and unshare actions. Off on the shared preview page.
    #[prop_or(true)]
    pub shareable: bool,
    /// Starts playing as soon as there is something to play.
    #[prop_or(false)]
    pub autoplay: bool,
}
