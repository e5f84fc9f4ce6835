mod form_component;
mod movie_list;
mod search_bar;
