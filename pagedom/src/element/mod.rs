mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find the first element (in document order) carrying the given class.
pub fn find_by_class<'a>(root: &'a Element, class: &str) -> Option<&'a Element> {
    if root.has_class(class) {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_by_class(child, class) {
                return Some(found);
            }
        }
    }

    None
}

/// IDs from `root` down to the element with `id`, both ends included.
pub fn path_to(root: &Element, id: &str) -> Option<Vec<String>> {
    if root.id == id {
        return Some(vec![root.id.clone()]);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(mut path) = path_to(child, id) {
                path.insert(0, root.id.clone());
                return Some(path);
            }
        }
    }

    None
}

/// Detach the element with `id` from the tree. The root itself cannot be removed.
pub fn remove_element(root: &mut Element, id: &str) -> Option<Element> {
    let Content::Children(children) = &mut root.content else {
        return None;
    };

    if let Some(index) = children.iter().position(|child| child.id == id) {
        return Some(children.remove(index));
    }

    children
        .iter_mut()
        .find_map(|child| remove_element(child, id))
}
