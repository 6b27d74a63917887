/// Read-only view of one element in a scene document tree.
pub trait TagNode: Sized {
	/// Tag name as written in the document.
	fn tag(&self) -> &str;

	/// Raw text of the named attribute, if present.
	fn attr(&self, name: &str) -> Option<&str>;

	/// Names of every attribute on the element, in document order.
	fn attr_names(&self) -> impl Iterator<Item = &str>;

	/// Child elements, in document order.
	fn child_tags(&self) -> impl Iterator<Item = Self>;
}

impl<'a, 'input: 'a> TagNode for roxmltree::Node<'a, 'input> {
	fn tag(&self) -> &str {
		self.tag_name().name()
	}

	fn attr(&self, name: &str) -> Option<&str> {
		self.attribute(name)
	}

	fn attr_names(&self) -> impl Iterator<Item = &str> {
		self.attributes().map(|attribute| attribute.name())
	}

	fn child_tags(&self) -> impl Iterator<Item = Self> {
		self.children().filter(|node| node.is_element())
	}
}
