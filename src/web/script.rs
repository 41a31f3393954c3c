use wasm_bindgen::JsCast;

/// One attached `<script>` element, owned for as long as the handle lives.
///
/// The load is fire-and-forget: nothing here awaits or observes the fetch, and
/// detaching the node does not abort an in-flight fetch or stop glue code that
/// has already started running. The browser owns all of that.
pub struct ScriptHandle {
    node: web_sys::HtmlScriptElement,
}

impl ScriptHandle {
    /// Creates an async `<script src=...>` element and appends it to the body,
    /// which makes the browser start fetching and executing it.
    pub fn attach(src: &str) -> Result<Self, String> {
        let window = web_sys::window().ok_or("no window".to_string())?;
        let document = window.document().ok_or("no document".to_string())?;

        let node = document
            .create_element("script")
            .map_err(|_| "document: create_element failed".to_string())?
            .dyn_into::<web_sys::HtmlScriptElement>()
            .map_err(|_| "document: script cast failed".to_string())?;
        node.set_src(src);
        node.set_async(true);

        let body = document.body().ok_or("no body".to_string())?;
        body.append_child(&node)
            .map_err(|_| "body: append_child failed".to_string())?;

        Ok(Self { node })
    }

    /// Removes the script element from the document. No-op if it was already
    /// removed.
    pub fn detach(&self) {
        if let Some(parent) = self.node.parent_node() {
            let _ = parent.remove_child(&self.node);
        }
    }

    /// Resolved source URL of the attached element.
    pub fn src(&self) -> String {
        self.node.src()
    }
}
