mod backup;
mod inspect;
mod restore;
