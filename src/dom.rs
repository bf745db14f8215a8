use beforeafter_core::{MediaLayer, MediaProfile, Part, SliderConfig, SliderError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, HtmlVideoElement};

fn dom_error(err: JsValue) -> SliderError {
    SliderError::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

fn find(container: &Element, selector: &str) -> Result<Option<HtmlElement>, SliderError> {
    let found = container.query_selector(selector).map_err(dom_error)?;
    Ok(found.and_then(|element| element.dyn_into::<HtmlElement>().ok()))
}

fn require(container: &Element, selector: &str, part: Part) -> Result<HtmlElement, SliderError> {
    find(container, selector)?.ok_or(SliderError::MissingPart(part))
}

pub(crate) struct SliderParts {
    pub container: HtmlElement,
    pub frame: HtmlElement,
    pub before: HtmlElement,
    pub after: HtmlElement,
    pub handle: HtmlElement,
    pub knob: Option<HtmlElement>,
}

impl SliderParts {
    pub(crate) fn locate(container: &Element, config: &SliderConfig) -> Result<Self, SliderError> {
        let frame = require(container, &config.frame_selector, Part::Frame)?;
        let before = require(container, &config.before_selector, Part::Before)?;
        let after = require(container, &config.after_selector, Part::After)?;
        let handle = require(container, &config.handle_selector, Part::Handle)?;
        let knob = find(container, &config.knob_selector)?;
        let container = container
            .clone()
            .dyn_into::<HtmlElement>()
            .map_err(|_| SliderError::Dom("container is not an html element".to_string()))?;
        Ok(Self {
            container,
            frame,
            before,
            after,
            handle,
            knob,
        })
    }

    pub(crate) fn media_profile(&self) -> MediaProfile {
        MediaProfile::new(classify(&self.before), classify(&self.after))
    }

    pub(crate) fn videos(&self) -> Option<(HtmlVideoElement, HtmlVideoElement)> {
        let before = self.before.clone().dyn_into::<HtmlVideoElement>().ok()?;
        let after = self.after.clone().dyn_into::<HtmlVideoElement>().ok()?;
        Some((before, after))
    }
}

fn classify(element: &Element) -> MediaLayer {
    let src = element.get_attribute("src");
    MediaLayer::classify(&element.tag_name(), src.as_deref())
}
