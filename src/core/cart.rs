use crate::domain::model::{CartItem, Course};

/// Reserves a seat on `course_id`.
///
/// Returns the snapshot pushed onto the cart, or `None` when the course is
/// not in the catalog or has no spaces left. In that case nothing changes.
pub fn add_to_cart(
    courses: &mut [Course],
    cart: &mut Vec<CartItem>,
    course_id: &str,
) -> Option<CartItem> {
    let course = courses
        .iter_mut()
        .find(|c| c.id == course_id && c.spaces_available > 0)?;

    course.spaces_available -= 1;
    let item = CartItem::snapshot(course);
    cart.push(item.clone());
    Some(item)
}

/// Releases the first reserved seat on `course_id`.
///
/// The seat goes back to the catalog only if the course is still listed.
/// Returns `false` when the cart holds no such entry.
pub fn remove_from_cart(
    courses: &mut [Course],
    cart: &mut Vec<CartItem>,
    course_id: &str,
) -> bool {
    let Some(index) = cart.iter().position(|item| item.id() == course_id) else {
        return false;
    };
    cart.remove(index);

    if let Some(course) = courses.iter_mut().find(|c| c.id == course_id) {
        course.spaces_available += 1;
    }
    true
}
